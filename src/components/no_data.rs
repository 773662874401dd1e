use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NoDataProps {
    pub title: AttrValue,
}

/// Placeholder card for a view whose log is empty
#[function_component(NoData)]
pub fn no_data(props: &NoDataProps) -> Html {
    html! {
        <div class="view-card no-data">
            <h3>{&props.title}</h3>
            <p>{"ยังไม่มีข้อมูล"}</p>
        </div>
    }
}
