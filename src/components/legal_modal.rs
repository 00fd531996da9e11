use log::warn;
use stylist::Style;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::content::LegalDocument;

const MODAL_CSS: &str = r#"
    position: fixed;
    inset: 0;
    z-index: 100;
    display: flex;
    align-items: center;
    justify-content: center;
    padding: 1.5rem;
    background: rgba(0, 0, 0, 0.75);
    backdrop-filter: blur(4px);

    .modal-panel {
        position: relative;
        max-width: 42rem;
        max-height: 80vh;
        overflow-y: auto;
        padding: 2.5rem;
        border-radius: 1.5rem;
        border: 1px solid #222;
        background: #0b0b0b;
        color: #e5e5e5;
    }

    .modal-panel h2 {
        margin-bottom: 1.5rem;
        font-size: 1.75rem;
    }

    .modal-panel p {
        margin-bottom: 1rem;
        line-height: 1.6;
        color: #a3a3a3;
    }

    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        border: none;
        background: transparent;
        color: #FF746C;
        font-size: 1.5rem;
        cursor: pointer;
    }
"#;

#[derive(Properties, PartialEq)]
pub struct LegalModalProps {
    /// Document to show; `None` renders nothing.
    pub document: Option<LegalDocument>,
    pub on_close: Callback<()>,
}

#[function_component(LegalModal)]
pub fn legal_modal(props: &LegalModalProps) -> Html {
    let style = use_memo(|_| Style::new(MODAL_CSS), ());

    {
        let on_close = props.on_close.clone();
        let is_open = props.document.is_some();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if is_open && e.key() == "Escape" {
                on_close.emit(());
            }
        });
    }

    let Some(document) = &props.document else {
        return html! {};
    };

    let class = match &*style {
        Ok(style) => style.get_class_name().to_string(),
        Err(err) => {
            warn!("modal style rejected: {}", err);
            String::new()
        }
    };

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class={classes!("modal-overlay", class)} onclick={close.clone()}>
            <div class="modal-panel" role="dialog" aria-modal="true" onclick={keep_open}>
                <button class="modal-close" aria-label="Fechar" onclick={close}>{"×"}</button>
                <h2>{document.title.clone()}</h2>
                {
                    document.paragraphs.iter().map(|paragraph| html! {
                        <p>{paragraph.clone()}</p>
                    }).collect::<Html>()
                }
            </div>
        </div>
    }
}
