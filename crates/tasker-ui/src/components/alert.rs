use yew::{Html, Properties, function_component, html};

#[derive(Clone, PartialEq)]
pub enum AlertKind {
    Error,
    Success,
}

#[derive(Properties, PartialEq)]
pub struct AlertProps {
    pub kind: AlertKind,
    pub text: String,
}

#[function_component(Alert)]
pub fn alert(props: &AlertProps) -> Html {
    if props.text.is_empty() {
        return html! {};
    }

    let class = match props.kind {
        AlertKind::Error => "alert error",
        AlertKind::Success => "alert success",
    };

    html! { <div {class}>{ &props.text }</div> }
}
