//! Update function for the registration form.
//!
//! Every submit ends in exactly one `Msg::Resolved`, whatever happened on
//! the wire, so the status always leaves `Submitting` and the submit button
//! is enabled again.

use common::submission::settle;
use gloo_console::warn;
use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::dom::scroll_window_to;

use super::messages::Msg;
use super::state::RegistrationFormComponent;
use super::submit::post_registration;
use super::variant::{FormVariant, SCROLL_MARGIN_PX};

pub fn update<F: FormVariant>(
    component: &mut RegistrationFormComponent<F>,
    ctx: &Context<RegistrationFormComponent<F>>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::UpdateField { name, value } => match component.form.set_field(name, value) {
            Ok(()) => true,
            Err(err) => {
                warn!(err.to_string());
                false
            }
        },
        Msg::Submit => {
            if let Err(err) = component.status.begin() {
                warn!(err.to_string());
                return false;
            }
            component.dismiss = None;

            let url = ctx.props().api.endpoint(F::ENDPOINT);
            let form = component.form.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = post_registration(&url, &form).await;
                link.send_message(Msg::Resolved(outcome));
            });
            true
        }
        Msg::Resolved(outcome) => {
            let message = match settle(&mut component.status, &mut component.form, outcome) {
                Ok(message) => message,
                Err(err) => {
                    warn!(err.to_string());
                    return false;
                }
            };

            if message.is_success() {
                if F::SCROLL_ON_SUCCESS {
                    scroll_window_to(F::ANCHOR_ID, SCROLL_MARGIN_PX);
                }
                if let Some(delay) = F::SUCCESS_DISMISS_MS {
                    let link = ctx.link().clone();
                    component.dismiss = Some(Timeout::new(delay, move || {
                        link.send_message(Msg::DismissMessage);
                    }));
                }
            }
            true
        }
        Msg::DismissMessage => {
            component.dismiss = None;
            component.status.dismiss().is_ok()
        }
    }
}
