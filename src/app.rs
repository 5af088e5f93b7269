//! Root application component with routing and context providers.

use std::rc::Rc;

use gate::config::GateConfig;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::{
    access_guard::AccessGuard, modal_host::ModalHost, page_chrome::PageChrome,
};
use crate::pages::{
    diaries::DiariesPage, diary_detail::DiaryDetailPage, diary_new::DiaryNewPage, home::HomePage,
    login::LoginPage, pictures::PicturesPage,
};
use crate::state::{
    auth::AuthState,
    modal::ModalController,
    services::{ClientServices, diary_policies},
};
use crate::util::{
    navigation::RouterNavigator,
    session_events::{StorageListener, install_cross_tab_listener},
    storage::BrowserStorage,
    timer::Timer,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/diary.css"/>
        <Title text="diary"/>

        <Router>
            <AppFrame/>
        </Router>
    }
}

/// Everything that needs the router: services, auth mirror, modal stack,
/// layout chrome, and the guarded routes.
#[component]
fn AppFrame() -> impl IntoView {
    let config = GateConfig::default();
    let navigate = use_navigate();
    let navigator = RouterNavigator::new(move |path| navigate(path, Default::default()));

    let services = StoredValue::new_local(ClientServices::new(
        Rc::new(BrowserStorage),
        Rc::new(navigator),
        diary_policies(),
        config.clone(),
    ));
    let auth = RwSignal::new(AuthState::default());
    let modals = ModalController::new(&config);

    let subscriber = services.with_value(|s| s.auth.subscribe(move |session| auth.update(|a| a.apply(session))));

    provide_context(services);
    provide_context(auth);
    provide_context(modals);

    let ready_timer = StoredValue::new_local(None::<Timer>);
    let storage_listener = StoredValue::new_local(None::<StorageListener>);
    let ready_delay_ms = config.hydration_ready_delay_ms();

    // Client-only: read storage, then release the page gate after the delay.
    Effect::new(move || {
        let bus = services.with_value(|s| {
            s.auth.hydrate();
            Rc::clone(&s.bus)
        });
        ready_timer.set_value(Some(Timer::after(ready_delay_ms, move || {
            auth.update(|a| a.ready = true);
        })));
        storage_listener.set_value(Some(install_cross_tab_listener(bus)));
    });

    on_cleanup(move || {
        ready_timer.set_value(None);
        storage_listener.set_value(None);
        services.with_value(|s| {
            s.auth.unsubscribe(subscriber);
        });
    });

    view! {
        <PageChrome>
            <AccessGuard>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=StaticSegment("diaries") view=DiariesPage/>
                    <Route path=(StaticSegment("diaries"), StaticSegment("new")) view=DiaryNewPage/>
                    <Route path=(StaticSegment("diaries"), ParamSegment("id")) view=DiaryDetailPage/>
                    <Route path=StaticSegment("pictures") view=PicturesPage/>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </AccessGuard>
        </PageChrome>
        <ModalHost/>
    }
}
