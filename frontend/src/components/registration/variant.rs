use common::model::registration::{ExhibitorRegistration, RegistrationForm, VisitorRegistration};

/// Per-form behaviour around a settled submission.
pub trait FormVariant: RegistrationForm {
    /// Id of the page section wrapping the form.
    const ANCHOR_ID: &'static str;

    /// Scroll the window back up to the section after a success.
    const SCROLL_ON_SUCCESS: bool;

    /// Hide the success message after this many milliseconds.
    const SUCCESS_DISMISS_MS: Option<u32>;
}

impl FormVariant for ExhibitorRegistration {
    const ANCHOR_ID: &'static str = "registration-form";
    const SCROLL_ON_SUCCESS: bool = true;
    const SUCCESS_DISMISS_MS: Option<u32> = None;
}

impl FormVariant for VisitorRegistration {
    const ANCHOR_ID: &'static str = "visitor-registration";
    const SCROLL_ON_SUCCESS: bool = false;
    const SUCCESS_DISMISS_MS: Option<u32> = Some(3000);
}

/// Distance kept between the top of the viewport and the scrolled-to section.
pub const SCROLL_MARGIN_PX: i32 = 100;
