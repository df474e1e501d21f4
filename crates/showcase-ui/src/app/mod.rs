use crate::components::accordion::{Accordion, AccordionItem};
use crate::components::theme_toggle::ThemeToggle;
use crate::core::config::ShowcaseConfig;
use crate::core::theme::{ThemeMode, ThemePreferenceController};
use gloo::console;
use preferences::BrowserThemeEnvironment;
use yew::prelude::*;

mod preferences;

#[function_component(ShowcaseApp)]
pub(crate) fn showcase_app() -> Html {
    let config = use_memo(|_| ShowcaseConfig::default(), ());
    let controller = {
        let settings = config.theme.clone();
        use_mut_ref(move || {
            match ThemePreferenceController::initialize(BrowserThemeEnvironment::new(settings)) {
                Ok(controller) => Some(controller),
                Err(err) => {
                    console::error!("theme controller unavailable", err.to_string());
                    None
                }
            }
        })
    };
    let mode = {
        let controller = controller.clone();
        use_state(move || {
            controller
                .borrow()
                .as_ref()
                .map_or(ThemeMode::Light, |controller| controller.mode())
        })
    };

    let on_toggle = {
        let controller = controller.clone();
        let mode = mode.clone();
        Callback::from(move |()| {
            if let Some(controller) = controller.borrow_mut().as_mut() {
                controller.toggle();
                mode.set(controller.mode());
            }
        })
    };

    let id_prefix = AttrValue::from(config.disclosure.id_prefix.clone());

    html! {
        <div class="showcase min-h-screen">
            <header class="showcase-header flex justify-between items-center px-4 py-4">
                <h1 class="text-xl font-bold">{"Design System"}</h1>
                <ThemeToggle mode={*mode} ontoggle={on_toggle} />
            </header>
            <main class="container mx-auto px-4 py-8">
                <Accordion>
                    <AccordionItem
                        title="What is this?"
                        default_open={true}
                        id_prefix={id_prefix.clone()}
                    >
                        {"A small set of accessible components with light and dark themes."}
                    </AccordionItem>
                    <AccordionItem title="Is it accessible?" id_prefix={id_prefix.clone()}>
                        {"Triggers announce their expanded state and the region they control."}
                    </AccordionItem>
                    <AccordionItem title="Coming soon" disabled={true} id_prefix={id_prefix}>
                        {"Disabled sections never open."}
                    </AccordionItem>
                </Accordion>
            </main>
        </div>
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    yew::Renderer::<ShowcaseApp>::new().render();
}
