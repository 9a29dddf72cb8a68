//! Registration form: one generic Yew component rendering either the
//! exhibitor or the visitor form from its field table.
//!
//! Layout follows the other components: `state` holds the form values and
//! submission status, `update` drives the status machine from
//! `common::submission`, `submit` performs the POST and `view` renders the
//! status banner and the form. `variant` holds what differs between the two
//! forms once a submission settles.

use common::model::registration::{ExhibitorRegistration, VisitorRegistration};
use yew::prelude::*;

mod messages;
mod props;
mod state;
mod submit;
mod update;
mod variant;
mod view;

pub use messages::Msg;
pub use props::RegistrationProps;
pub use state::RegistrationFormComponent;
pub use variant::FormVariant;

pub type ExhibitorForm = RegistrationFormComponent<ExhibitorRegistration>;
pub type VisitorForm = RegistrationFormComponent<VisitorRegistration>;

impl<F: FormVariant> Component for RegistrationFormComponent<F> {
    type Message = Msg;
    type Properties = RegistrationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        RegistrationFormComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.dismiss = None;
    }
}
