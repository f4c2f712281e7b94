use crate::dashboards::d100_overview::ui::dashboard::OverviewDashboard;
use crate::domain::a001_absence::ui::list::AbsenceList;
use crate::domain::a002_grade::ui::list::GradeList;
use crate::domain::a003_message::ui::list::MessageList;
use crate::domain::a004_bulletin::ui::list::BulletinList;
use crate::domain::a005_calendar_event::ui::list::CalendarEventList;
use crate::domain::a006_document::ui::list::DocumentList;
use crate::domain::a007_homework::ui::list::HomeworkList;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::system::pages::navigation_preview::NavigationPreviewPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::settings::SettingsPage;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

// Пути совпадают с PATH_* из contracts::system::navigation
#[component]
fn MainLayout() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once when the layout is created
    ctx.init_language();

    view! {
        <Shell>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=OverviewDashboard />
                <Route path=path!("/grades") view=GradeList />
                <Route path=path!("/absences") view=AbsenceList />
                <Route path=path!("/homework") view=HomeworkList />
                <Route path=path!("/messages") view=MessageList />
                <Route path=path!("/bulletin") view=BulletinList />
                <Route path=path!("/calendar") view=CalendarEventList />
                <Route path=path!("/documents") view=DocumentList />
                <Route path=path!("/admin/navigation") view=NavigationPreviewPage />
                <Route path=path!("/admin/settings") view=SettingsPage />
            </Routes>
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <MainLayout />
        </Router>
    }
}
