use contracts::dashboards::d100_overview::OverviewSummary;
use contracts::domain::a004_bulletin::Announcement;
use contracts::domain::{a001_absence, a002_grade, a003_message, a004_bulletin, a005_calendar_event, a007_homework};
use contracts::enums::Language;
use contracts::shared::list_query::SortSpec;
use leptos::prelude::*;

use crate::domain::a004_bulletin::ui::list::AnnouncementCard;
use crate::shared::components::stat_card::StatCard;
use crate::shared::config::Config;
use crate::shared::date_utils::{format_date, format_score};
use crate::shared::i18n::use_language;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;

const PINNED_ON_DASHBOARD: usize = 2;

/// Последние закреплённые объявления
fn latest_pinned(announcements: &[Announcement], limit: usize) -> Vec<Announcement> {
    let mut pinned: Vec<&Announcement> = announcements.iter().filter(|a| a.pinned).collect();
    SortSpec::<Announcement>::pinned_then_date_desc().sort(&mut pinned);
    pinned.into_iter().take(limit).cloned().collect()
}

fn count_text(lang: Language, count: usize, es: &str, en: &str) -> String {
    format!("{count} {}", lang.pick(es, en))
}

/// Главная страница: сводка по всем разделам портала
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let lang = use_language();
    let config = use_context::<Config>().expect("Config context not found");
    let today = config.today();

    let summary = OverviewSummary::compute(
        &a001_absence::data::dataset(),
        &a002_grade::data::dataset(),
        &a003_message::data::dataset(),
        &a005_calendar_event::data::dataset(),
        &a007_homework::data::dataset(),
        today,
    );
    log::debug!("Overview summary for {today}: {summary:?}");
    let pinned = latest_pinned(a004_bulletin::data::dataset().all(), PINNED_ON_DASHBOARD);

    let s = StoredValue::new(summary);
    let label = move |es: &'static str, en: &'static str| Signal::derive(move || lang.get().pick(es, en).to_string());

    view! {
        <PageFrame page_id="d100_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Resumen", "Overview")}</h1>
                </div>
                <div class="page__header-right">
                    <span class="text-muted">{move || format_date(today, lang.get())}</span>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard
                        label=label("Faltas sin justificar", "Unjustified absences")
                        icon_name="user-x"
                        value=Signal::derive(move || s.with_value(|s| s.unjustified_absences.to_string()))
                        hint=Signal::derive(move || s.with_value(|s| {
                            count_text(lang.get(), s.total_absences, "faltas en total", "absences in total")
                        }))
                        alert=Signal::derive(move || s.with_value(|s| s.unjustified_absences > 0))
                        href="/absences"
                    />
                    <StatCard
                        label=label("Nota media", "Average grade")
                        icon_name="award"
                        value=Signal::derive(move || s.with_value(|s| {
                            s.average_grade
                                .map(|avg| format_score(avg, lang.get()))
                                .unwrap_or_else(|| "-".to_string())
                        }))
                        hint=Signal::derive(move || s.with_value(|s| {
                            count_text(lang.get(), s.failed_assessments, "suspensos", "failed")
                        }))
                        alert=Signal::derive(move || s.with_value(|s| s.failed_assessments > 0))
                        href="/grades"
                    />
                    <StatCard
                        label=label("Mensajes sin leer", "Unread messages")
                        icon_name="mail"
                        value=Signal::derive(move || s.with_value(|s| s.unread_messages.to_string()))
                        alert=Signal::derive(move || s.with_value(|s| s.unread_messages > 0))
                        href="/messages"
                    />
                    <StatCard
                        label=label("Próximos eventos", "Upcoming events")
                        icon_name="calendar"
                        value=Signal::derive(move || s.with_value(|s| s.upcoming_events.to_string()))
                        hint=Signal::derive(move || s.with_value(|s| match &s.next_event {
                            Some(event) => format!("{} · {}", format_date(event.date, lang.get()), event.title),
                            None => lang.get().pick("Sin eventos", "No events").to_string(),
                        }))
                        href="/calendar"
                    />
                    <StatCard
                        label=label("Deberes pendientes", "Pending homework")
                        icon_name="clipboard"
                        value=Signal::derive(move || s.with_value(|s| s.pending_homework.to_string()))
                        hint=Signal::derive(move || s.with_value(|s| {
                            count_text(lang.get(), s.overdue_homework, "vencidos", "overdue")
                        }))
                        alert=Signal::derive(move || s.with_value(|s| s.overdue_homework > 0))
                        href="/homework"
                    />
                </div>

                <h2 class="section-title">{move || lang.get().pick("Anuncios destacados", "Pinned announcements")}</h2>
                <div class="bulletin-grid">
                    {pinned
                        .into_iter()
                        .map(|announcement| view! { <AnnouncementCard announcement=announcement /> })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_pinned_only_returns_pinned_newest_first() {
        let all = a004_bulletin::data::dataset().all();
        let pinned = latest_pinned(all, 2);
        assert!(pinned.len() <= 2);
        assert!(pinned.iter().all(|a| a.pinned));
        if let [first, second] = pinned.as_slice() {
            assert!(first.published_at >= second.published_at);
        }
    }

    #[test]
    fn test_latest_pinned_on_empty_dataset() {
        assert!(latest_pinned(&[], 2).is_empty());
    }

    #[test]
    fn test_count_text() {
        assert_eq!(count_text(Language::EnUs, 3, "vencidos", "overdue"), "3 overdue");
        assert_eq!(count_text(Language::EsEs, 0, "vencidos", "overdue"), "0 vencidos");
    }
}
