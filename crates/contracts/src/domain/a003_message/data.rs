use super::aggregate::{Message, MessageCategory, MessageStatus};
use crate::domain::common::at;
use crate::shared::dataset::StaticDataset;
use chrono::NaiveDateTime;
use once_cell::sync::Lazy;

#[allow(clippy::too_many_arguments)]
fn message(
    id: u32,
    sender: &str,
    title: &str,
    body: &str,
    category: MessageCategory,
    status: MessageStatus,
    received_at: NaiveDateTime,
    has_attachment: bool,
) -> Message {
    Message {
        id: format!("msg-{id:03}"),
        sender: sender.to_string(),
        title: title.to_string(),
        body: body.to_string(),
        category,
        status,
        received_at,
        has_attachment,
    }
}

pub static MESSAGES: Lazy<Vec<Message>> = Lazy::new(|| {
    use MessageCategory as C;
    use MessageStatus as S;
    vec![
        message(10, "Jorge Navarro", "Recuperación de Matemáticas", "La prueba de recuperación será el jueves a tercera hora.", C::Teachers, S::Unread, at(2026, 3, 11, 17, 40), false),
        message(9, "Secretaría", "Plazo de matrícula en actividades", "Recordamos que el plazo termina el día 20.", C::Administration, S::Unread, at(2026, 3, 9, 9, 5), true),
        message(8, "Elena Ruiz (tutora)", "Reunión de seguimiento", "Os propongo una tutoría el martes a las 16:30.", C::Tutoring, S::Unread, at(2026, 3, 2, 12, 20), false),
        message(7, "AMPA", "Carnaval: necesitamos voluntarios", "Buscamos familias para ayudar en el desfile.", C::Activities, S::Read, at(2026, 2, 10, 18, 0), false),
        message(6, "Secretaría", "Boletín de notas de la 1.ª evaluación", "Ya está disponible en Documentos.", C::Administration, S::Read, at(2025, 12, 22, 10, 30), true),
        message(5, "Emma Collins", "Speaking club", "The speaking club starts on Wednesday afternoons.", C::Teachers, S::Read, at(2025, 12, 1, 15, 45), false),
        message(4, "Elena Ruiz (tutora)", "Informe de adaptación", "Adjunto el informe del primer mes.", C::Tutoring, S::Read, at(2025, 10, 28, 13, 10), true),
        message(3, "Departamento de Orientación", "Charla sobre técnicas de estudio", "Invitamos a las familias a la charla del viernes.", C::Activities, S::Read, at(2025, 10, 14, 11, 0), false),
        message(2, "Secretaría", "Autorización de salida", "Es necesario firmar la autorización para la excursión.", C::Administration, S::Read, at(2025, 10, 2, 8, 50), true),
        message(1, "Dirección", "Bienvenida al curso 2025-2026", "Os damos la bienvenida al nuevo curso escolar.", C::Administration, S::Read, at(2025, 9, 8, 8, 0), false),
    ]
});

pub fn dataset() -> StaticDataset<Message> {
    StaticDataset::new(&MESSAGES)
}
