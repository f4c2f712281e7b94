mod state;

use contracts::domain::a004_bulletin::{
    data, Announcement, AnnouncementCategory, Audience, FILTER_AUDIENCE, FILTER_CATEGORY,
};
use contracts::shared::list_query::SortSpec;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::filter_select::{ActiveFilterTags, FilterDef, ListFilters};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::i18n::use_language;
use crate::shared::icons::icon;
use crate::shared::list_utils::enum_options;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use state::{create_state, PAGE_SIZE};

/// Карточка объявления с доски
#[component]
pub fn AnnouncementCard(announcement: Announcement) -> impl IntoView {
    let lang = use_language();
    let category = announcement.category;
    let audience = announcement.audience;
    let published = announcement.published_at.date();

    view! {
        <div class="bulletin-card" class:bulletin-card--pinned=announcement.pinned>
            <div class="bulletin-card__meta">
                {announcement.pinned.then(|| view! {
                    <span class="badge badge--warning">
                        {icon("pin")}
                        {move || lang.get().pick(" Fijado", " Pinned")}
                    </span>
                })}
                <span class="badge badge--neutral">{move || category.label(lang.get())}</span>
                <span class="bulletin-card__audience">{move || audience.label(lang.get())}</span>
            </div>
            <h3 class="bulletin-card__title">{announcement.title.clone()}</h3>
            <p class="bulletin-card__summary">{announcement.summary.clone()}</p>
            <div class="bulletin-card__footer">
                <span>{announcement.author.clone()}</span>
                <span>{move || format_date(published, lang.get())}</span>
            </div>
        </div>
    }
}

#[component]
pub fn BulletinList() -> impl IntoView {
    let lang = use_language();
    let state = create_state();
    let filters_expanded = RwSignal::new(true);
    let sort = SortSpec::<Announcement>::pinned_then_date_desc();

    let page = Memo::new(move |_| state.with(|s| s.query(&data::dataset(), Some(&sort), PAGE_SIZE)));
    let summary = Signal::derive(move || page.with(|p| p.summary()));

    let defs = Memo::new(move |_| {
        let lang = lang.get();
        vec![
            FilterDef::new(
                FILTER_CATEGORY,
                lang.pick("Categoría", "Category"),
                enum_options(
                    AnnouncementCategory::all(),
                    AnnouncementCategory::code,
                    AnnouncementCategory::label,
                    lang,
                ),
            ),
            FilterDef::new(
                FILTER_AUDIENCE,
                lang.pick("Dirigido a", "Audience"),
                enum_options(Audience::all(), Audience::code, Audience::label, lang),
            ),
        ]
    });

    view! {
        <PageFrame page_id="a004_bulletin--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{move || lang.get().pick("Tablón de anuncios", "Bulletin board")}</h1>
                    <Badge>{move || page.with(|p| p.total_count.to_string())}</Badge>
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

                <div class="bulletin-grid">
                    <For
                        each=move || page.get().items
                        key=|a| a.id.clone()
                        children=move |announcement| view! { <AnnouncementCard announcement=announcement /> }
                    />
                </div>
                {move || page.with(|p| p.is_empty()).then(|| view! { <EmptyState /> })}
            </div>
        </PageFrame>
    }
}
