use common::model::registration::{FieldKind, FieldSpec};
use common::submission::MessageKind;
use yew::html::Scope;
use yew::prelude::*;

use crate::dom::event_value;

use super::messages::Msg;
use super::state::RegistrationFormComponent;
use super::variant::FormVariant;

pub fn view<F: FormVariant>(
    component: &RegistrationFormComponent<F>,
    ctx: &Context<RegistrationFormComponent<F>>,
) -> Html {
    let link = ctx.link();
    let submitting = component.status.is_submitting();
    let fields = F::FIELDS
        .iter()
        .map(|spec| build_field(&component.form, link, spec))
        .collect::<Html>();

    html! {
        <>
            { build_message(component) }
            <form
                class="registration-form"
                onsubmit={link.callback(|e: SubmitEvent| {
                    e.prevent_default();
                    Msg::Submit
                })}
            >
                { fields }
                <button
                    type="submit"
                    class={classes!("btn", "btn-primary", "btn-block", submitting.then_some("is-busy"))}
                    disabled={submitting}
                >
                    { if submitting { "Submitting..." } else { "Submit Registration" } }
                </button>
            </form>
        </>
    }
}

fn build_message<F: FormVariant>(component: &RegistrationFormComponent<F>) -> Html {
    match component.status.message() {
        Some(message) => {
            let tone = match message.kind {
                MessageKind::Success => "status-success",
                MessageKind::Error => "status-error",
            };
            html! {
                <div class={classes!("status-message", tone)} role="status">
                    <p>{ message.text.clone() }</p>
                </div>
            }
        }
        None => html! {},
    }
}

/// Renders one labelled control. Required-ness and email/tel shape are
/// enforced by the browser through the `required` and `type` attributes.
fn build_field<F: FormVariant>(
    form: &F,
    link: &Scope<RegistrationFormComponent<F>>,
    spec: &FieldSpec,
) -> Html {
    let name = spec.name;
    let value = form.field(name).unwrap_or_default().to_string();
    let on_value = move |e: Event| Msg::UpdateField {
        name,
        value: event_value(&e).unwrap_or_default(),
    };

    let control = match spec.kind {
        FieldKind::Select { prompt, options } => html! {
            <select
                id={name}
                name={name}
                class="form-control"
                required={spec.required}
                onchange={link.callback(on_value)}
            >
                <option value="" selected={value.is_empty()}>{ prompt }</option>
                { for options.iter().map(|option| html! {
                    <option value={*option} selected={value == *option}>{ *option }</option>
                }) }
            </select>
        },
        FieldKind::TextArea { rows } => html! {
            <textarea
                id={name}
                name={name}
                class="form-control form-textarea"
                rows={rows.to_string()}
                required={spec.required}
                placeholder={spec.placeholder}
                value={value}
                oninput={link.callback(move |e: InputEvent| on_value(e.into()))}
            />
        },
        kind => html! {
            <input
                type={kind.input_type().unwrap_or("text")}
                id={name}
                name={name}
                class="form-control"
                required={spec.required}
                placeholder={spec.placeholder}
                value={value}
                oninput={link.callback(move |e: InputEvent| on_value(e.into()))}
            />
        },
    };

    html! {
        <div class="form-field">
            <label for={name} class="form-label">
                { spec.label }
                if spec.required {
                    <span class="required-mark">{ " *" }</span>
                }
            </label>
            { control }
        </div>
    }
}
