use charming::{Chart as CharmingChart, renderer::WasmRenderer};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::config::Config;
use crate::utils::debounce::debounced_resize_listener;

/// Turns a view model into a chart, or nothing when there is no data
pub type ChartBuilder<T> = fn(&T) -> Option<CharmingChart>;

/// Draws `view` into the element with id `mount_id` inside the returned node.
///
/// A missing mount, a zero-sized container or a view that builds no chart are
/// all silent no-ops. The chart is redrawn after the window stops resizing.
#[hook]
pub fn use_chart<T>(
    mount_id: &'static str,
    view: Rc<T>,
    build: ChartBuilder<T>,
) -> NodeRef
where
    T: PartialEq + 'static,
{
    let container_ref = use_node_ref();

    {
        let container_ref = container_ref.clone();

        use_effect_with((view, container_ref), move |(view, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().and_then(|container| {
                let chart = build(view)?;
                render_chart(&container, mount_id, &chart);

                debounced_resize_listener(Config::RESIZE_DEBOUNCE_MS, move || {
                    render_chart(&container, mount_id, &chart);
                })
            });

            move || drop(listener)
        });
    }

    container_ref
}

fn render_chart(container: &HtmlElement, mount_id: &str, chart: &CharmingChart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(mount_id, chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}
