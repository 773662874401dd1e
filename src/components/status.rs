use crate::hooks::use_usage::DataState;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub state: DataState,
}

#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    let state = &props.state;

    if state.is_loading() {
        return html! {
            <div class="status loading">
                <div class="spinner"></div>
                <p>{"กำลังโหลดข้อมูล..."}</p>
            </div>
        };
    }

    if let Some(msg) = state.error() {
        return html! {
            <div class="status error">
                <p>{"❌ Error: "}{msg}</p>
            </div>
        };
    }

    match state.data() {
        Some(payload) if payload.usage.is_empty() => html! {
            <div class="status empty">
                <p>{"ยังไม่มีข้อมูลการใช้ไฟ"}</p>
            </div>
        },
        _ => html! {},
    }
}
