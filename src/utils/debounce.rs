use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;

/// Listens for window resizes and runs `callback` once resizing has been quiet
/// for `delay_ms`.
///
/// Returns `None` outside a browser window. The listener (and any pending
/// timeout) is removed when the returned value is dropped, so keep it alive for
/// as long as the chart it redraws.
///
/// ```rust,ignore
/// use_effect_with(container_ref.clone(), move |container_ref| {
///     let listener = debounced_resize_listener(150, move || redraw());
///     move || drop(listener)
/// });
/// ```
pub fn debounced_resize_listener<F>(delay_ms: u32, callback: F) -> Option<EventListener>
where
    F: Fn() + 'static,
{
    let window = web_sys::window()?;
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let callback = Rc::new(callback);

    Some(EventListener::new(&window, "resize", move |_| {
        let cb = callback.clone();
        // Replacing the handle cancels the previous timeout
        *pending.borrow_mut() = Some(Timeout::new(delay_ms, move || cb()));
    }))
}
