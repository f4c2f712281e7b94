use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a005_calendar_event::{CalendarEvent, EventKind};
use contracts::enums::Language;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::config::Config;
use crate::shared::i18n::use_language;

/// Raw form input before validation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub location: String,
    pub description: String,
}

impl EventDraft {
    /// Build a validated event; the error is ready to show to the user
    pub fn build(&self, lang: Language) -> Result<CalendarEvent, String> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| lang.pick("Indica una fecha válida", "Enter a valid date").to_string())?;
        let start_time = if self.time.trim().is_empty() {
            None
        } else {
            Some(
                NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
                    .map_err(|_| lang.pick("Hora no válida", "Invalid time").to_string())?,
            )
        };
        let kind = EventKind::from_code(&self.kind).unwrap_or(EventKind::Activity);

        let event = CalendarEvent::new_for_insert(
            self.title.clone(),
            date,
            start_time,
            kind,
            Some(self.location.clone()),
            Some(self.description.clone()),
        );
        event.validate().map_err(|e| {
            format!("{}: {}", lang.pick("No se puede crear el evento", "Cannot create the event"), e)
        })?;
        Ok(event)
    }
}

/// Event creation form with a simulated server confirmation
#[component]
pub fn CalendarEventForm(on_created: Callback<CalendarEvent>, on_cancel: Callback<()>) -> impl IntoView {
    let lang = use_language();
    let config = use_context::<Config>().expect("Config context not found");
    let confirm_delay_ms = config.calendar.confirm_delay_ms;

    let title = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let time = RwSignal::new(String::new());
    let kind = RwSignal::new(EventKind::Activity.code().to_string());
    let location = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let submit = move || {
        if saving.get_untracked() {
            return;
        }
        let draft = EventDraft {
            title: title.get_untracked(),
            date: date.get_untracked(),
            time: time.get_untracked(),
            kind: kind.get_untracked(),
            location: location.get_untracked(),
            description: description.get_untracked(),
        };
        match draft.build(lang.get_untracked()) {
            Ok(event) => {
                set_error.set(None);
                set_saving.set(true);
                spawn_local(async move {
                    TimeoutFuture::new(confirm_delay_ms).await;
                    set_saving.set(false);
                    on_created.run(event);
                });
            }
            Err(message) => {
                log::debug!("Calendar form rejected: {message}");
                set_error.set(Some(message));
            }
        }
    };

    view! {
        <div class="form-card">
            <h2 class="form-card__title">{move || lang.get().pick("Nuevo evento", "New event")}</h2>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form-grid">
                <div class="form-group">
                    <label>{move || lang.get().pick("Título", "Title")}</label>
                    <Input value=title />
                </div>
                <div class="form-group">
                    <label>{move || lang.get().pick("Fecha", "Date")}</label>
                    <input
                        type="date"
                        class="form-input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>{move || lang.get().pick("Hora (opcional)", "Time (optional)")}</label>
                    <input
                        type="time"
                        class="form-input"
                        prop:value=move || time.get()
                        on:input=move |ev| time.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>{move || lang.get().pick("Tipo", "Type")}</label>
                    <Select value=kind>
                        {EventKind::all().into_iter().map(|k| view! {
                            <option value=k.code()>{move || k.label(lang.get())}</option>
                        }).collect_view()}
                    </Select>
                </div>
                <div class="form-group">
                    <label>{move || lang.get().pick("Lugar", "Location")}</label>
                    <Input value=location />
                </div>
                <div class="form-group form-group--wide">
                    <label>{move || lang.get().pick("Descripción", "Description")}</label>
                    <Textarea value=description />
                </div>
            </div>

            <Flex gap=FlexGap::Small>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| submit()
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() {
                        lang.get().pick("Guardando...", "Saving...")
                    } else {
                        lang.get().pick("Guardar", "Save")
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_cancel.run(())>
                    {move || lang.get().pick("Cancelar", "Cancel")}
                </Button>
            </Flex>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            title: "  Reunión de padres  ".into(),
            date: "2026-04-20".into(),
            time: "17:30".into(),
            kind: "meeting".into(),
            location: "Aula 3".into(),
            description: String::new(),
        }
    }

    #[test]
    fn test_valid_draft_builds_user_event() {
        let event = draft().build(Language::EnUs).unwrap();
        assert_eq!(event.title, "Reunión de padres");
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 4, 20).unwrap());
        assert_eq!(event.start_time, NaiveTime::from_hms_opt(17, 30, 0));
        assert_eq!(event.kind, EventKind::Meeting);
        assert_eq!(event.location.as_deref(), Some("Aula 3"));
        assert_eq!(event.description, None);
        assert!(event.created_by_user);
    }

    #[test]
    fn test_blank_time_is_all_day() {
        let mut d = draft();
        d.time = " ".into();
        assert_eq!(d.build(Language::EsEs).unwrap().start_time, None);
    }

    #[test]
    fn test_missing_date_is_rejected() {
        let mut d = draft();
        d.date.clear();
        assert_eq!(d.build(Language::EnUs).unwrap_err(), "Enter a valid date");
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".into();
        let err = d.build(Language::EnUs).unwrap_err();
        assert!(err.starts_with("Cannot create the event"));
    }

    #[test]
    fn test_unknown_kind_falls_back_to_activity() {
        let mut d = draft();
        d.kind = "party".into();
        assert_eq!(d.build(Language::EnUs).unwrap().kind, EventKind::Activity);
    }
}
