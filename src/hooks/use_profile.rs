use std::rc::Rc;
use yew::prelude::*;

use crate::models::usage::Profile;

/// Profile shared from the page controller. Renderers only read it.
pub type ProfileContext = Rc<Profile>;

#[hook]
pub fn use_profile() -> Option<ProfileContext> {
    use_context::<ProfileContext>()
}
