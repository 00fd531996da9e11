use yew::prelude::*;

#[function_component(SiteHeader)]
pub fn site_header() -> Html {
    html! {
        <header class="site-header">
            <div class="site-logo">
                <img src="/logo.png" alt="Logo OXI" />
            </div>
            <nav class="site-nav">
                <a href="#features">{"Recursos"}</a>
                <a href="#app">{"App"}</a>
                <a href="#contato">{"Contato"}</a>
            </nav>
        </header>
    }
}
