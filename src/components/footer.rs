use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config::{LEGAL_DRIVER_CLUB, LEGAL_PASSENGER_CLUB, LEGAL_TERMS};

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub brand: String,
    /// Emits the modal id of the legal text to show.
    pub on_open_legal: Callback<String>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let legal_link = |id: &'static str, label: &'static str| {
        let on_open_legal = props.on_open_legal.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_legal.emit(id.to_string());
        });
        html! {
            <button class="legal-link" {onclick}>{label}</button>
        }
    };

    html! {
        <footer class="site-footer">
            <img src="/logo.png" alt="Logo" class="footer-logo" />
            <div class="legal-links">
                {legal_link(LEGAL_TERMS, "Termos de Uso")}
                {" | "}
                {legal_link(LEGAL_DRIVER_CLUB, "Clube do Motorista")}
                {" | "}
                {legal_link(LEGAL_PASSENGER_CLUB, "Clube do Passageiro")}
            </div>
            <p class="copyright">
                {format!("© {} {} — Todos os direitos reservados.", Local::now().year(), props.brand)}
            </p>
        </footer>
    }
}
