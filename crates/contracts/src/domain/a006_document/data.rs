use super::aggregate::{Document, DocumentCategory};
use crate::domain::common::date;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDate;
use once_cell::sync::Lazy;

fn document(
    id: u32,
    title: &str,
    category: DocumentCategory,
    school_year: &str,
    issued_on: NaiveDate,
    file_name: &str,
    size_kb: u32,
) -> Document {
    Document {
        id: format!("doc-{id:03}"),
        title: title.to_string(),
        category,
        school_year: school_year.to_string(),
        issued_on,
        file_name: file_name.to_string(),
        size_kb,
    }
}

pub static DOCUMENTS: Lazy<Vec<Document>> = Lazy::new(|| {
    use DocumentCategory as C;
    vec![
        document(11, "Boletín 2.ª evaluación", C::Report, "2025-2026", date(2026, 3, 27), "boletin_2t_2025-2026.pdf", 184),
        document(10, "Autorización excursión Museo de Ciencias", C::Form, "2025-2026", date(2026, 3, 16), "autorizacion_museo.pdf", 92),
        document(9, "Circular: Semana cultural", C::Circular, "2025-2026", date(2026, 1, 26), "circular_semana_cultural.pdf", 240),
        document(8, "Boletín 1.ª evaluación", C::Report, "2025-2026", date(2025, 12, 22), "boletin_1t_2025-2026.pdf", 176),
        document(7, "Certificado de matrícula", C::Certificate, "2025-2026", date(2025, 9, 15), "certificado_matricula.pdf", 64),
        document(6, "Solicitud de comedor", C::Form, "2025-2026", date(2025, 9, 3), "solicitud_comedor.pdf", 110),
        document(5, "Circular: inicio de curso", C::Circular, "2025-2026", date(2025, 9, 1), "circular_inicio_curso.pdf", 315),
        document(4, "Boletín final", C::Report, "2024-2025", date(2025, 6, 24), "boletin_final_2024-2025.pdf", 190),
        document(3, "Certificado de notas", C::Certificate, "2024-2025", date(2025, 6, 30), "certificado_notas_2024-2025.pdf", 71),
        document(2, "Boletín 2.ª evaluación", C::Report, "2024-2025", date(2025, 3, 28), "boletin_2t_2024-2025.pdf", 181),
        document(1, "Circular: protocolo de salidas", C::Circular, "2024-2025", date(2024, 10, 7), "circular_salidas.pdf", 205),
    ]
});

pub fn dataset() -> StaticDataset<Document> {
    StaticDataset::new(&DOCUMENTS)
}
