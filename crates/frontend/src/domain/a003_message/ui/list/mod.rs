mod state;

use contracts::domain::a003_message::{
    data, Message, MessageCategory, MessageStatus, FILTER_CATEGORY, FILTER_STATUS,
};
use contracts::shared::live_event::LiveEvent;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{ActiveFilterTags, FilterDef, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::Config;
use crate::shared::date_utils::format_datetime;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::list_utils::enum_options;
use crate::shared::live_updates::use_live_updates;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, newest_first, PAGE_SIZE};

#[component]
pub fn MessageList() -> impl IntoView {
    let lang = use_language();
    let config = use_context::<Config>().expect("Config context not found");
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let sort = newest_first();

    // Session copy of the inbox: live messages are appended, reading marks them
    let messages = RwSignal::new(data::dataset().all().to_vec());
    let selected = RwSignal::new(None::<String>);

    let channel_status = use_live_updates(&config.live_updates, move |event| match event {
        LiveEvent::NewMessage { message } => {
            log::info!("Live message received: {}", message.id);
            messages.update(|list| {
                if !list.iter().any(|m| m.id == message.id) {
                    list.push(message);
                }
            });
        }
        LiveEvent::Heartbeat => log::trace!("Live channel heartbeat"),
    });

    let page = Memo::new(move |_| {
        messages.with(|list| state.with(|s| s.query(list, Some(&sort), PAGE_SIZE)))
    });
    let summary = Signal::derive(move || page.with(|p| p.summary()));
    let unread_count = Memo::new(move |_| messages.with(|list| list.iter().filter(|m| m.is_unread()).count()));

    let open_message = move |id: String| {
        messages.update(|list| {
            if let Some(message) = list.iter_mut().find(|m| m.id == id) {
                message.mark_read();
            }
        });
        selected.set(Some(id));
    };

    let selected_message = Memo::new(move |_| {
        selected.get().and_then(|id| messages.with(|list| list.iter().find(|m| m.id == id).cloned()))
    });

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_CATEGORY,
                lang.pick("Categoría", "Category"),
                enum_options(MessageCategory::all(), MessageCategory::code, MessageCategory::label, lang),
            ),
            FilterDef::new(
                FILTER_STATUS,
                lang.pick("Estado", "Status"),
                enum_options(MessageStatus::all(), MessageStatus::code, MessageStatus::label, lang),
            ),
        ]
    });

    view! {
        <PageFrame page_id="a003_message--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Mensajes", "Messages")}</h1>
                    <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
                    <span class="badge badge--primary">
                        {move || match lang.get() {
                            contracts::enums::Language::EsEs => format!("{} sin leer", unread_count.get()),
                            contracts::enums::Language::EnUs => format!("{} unread", unread_count.get()),
                        }}
                    </span>
                </div>
                <div class="page__header-right">
                    <span class=move || channel_status.get().badge_class()>
                        {icon("radio")}
                        " "
                        {move || channel_status.get().label(lang.get())}
                    </span>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.active_filter_count()))
                    pagination=move || view! {
                        <PaginationControls
                            summary=summary
                            on_page_change=Callback::new(move |p| state.update(|s| s.go_to_page(p)))
                        />
                    }
                    tags=move || view! { <ActiveFilterTags state=state defs=defs /> }
                >
                    <ListFilters state=state defs=defs />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>{move || lang.get().pick("Recibido", "Received")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Remitente", "From")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Asunto", "Subject")}</TableHeaderCell>
                                <TableHeaderCell>{move || lang.get().pick("Categoría", "Category")}</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || page.get().items
                                key=|m: &Message| (m.id.clone(), m.status)
                                children=move |message| {
                                    let id = message.id.clone();
                                    let received_at = message.received_at;
                                    let category = message.category;
                                    let unread = message.is_unread();
                                    view! {
                                        <TableRow
                                            class:table__row--unread=unread
                                            on:click=move |_| open_message(id.clone())
                                            attr:style="cursor: pointer;"
                                        >
                                            <TableCell>
                                                <TableCellLayout>{move || format_datetime(received_at, lang.get())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{message.sender.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {message.has_attachment.then(|| icon("paperclip"))}
                                                    <span style="font-weight: 500;">{message.title.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{move || category.label(lang.get())}</TableCellLayout>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || page.with(|p| p.is_empty()).then(|| view! { <EmptyState /> })}
                </div>

                {move || selected_message.get().map(|message| view! {
                    <div class="message-detail">
                        <div class="message-detail__header">
                            <h2 class="message-detail__title">{message.title.clone()}</h2>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| selected.set(None)>
                                {icon("x")}
                            </Button>
                        </div>
                        <div class="message-detail__meta">
                            {message.sender.clone()}
                            " · "
                            {format_datetime(message.received_at, lang.get())}
                        </div>
                        <p class="message-detail__body">{message.body.clone()}</p>
                    </div>
                })}
            </div>
        </PageFrame>
    }
}
