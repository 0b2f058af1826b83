//! Record Form Component
//!
//! Modal form used for both "add new" and "edit". Keeps the raw text of
//! each input locally so partially typed numbers are not reformatted; every
//! keystroke is also forwarded to the owner's draft or edit buffer.

use std::collections::HashMap;

use leptos::prelude::*;
use list_manager::FieldDef;

#[component]
pub fn RecordForm(
    #[prop(into)] title: String,
    fields: &'static [FieldDef],
    /// Starting text for each field, in `fields` order
    initial: Vec<String>,
    #[prop(into)] submit_label: String,
    #[prop(into)] on_input: Callback<(FieldDef, String)>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let raw = RwSignal::new(
        fields
            .iter()
            .map(|f| f.name)
            .zip(initial)
            .collect::<HashMap<&'static str, String>>(),
    );

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <form class="modal" on:click=|ev| ev.stop_propagation() on:submit=submit>
                <h2 class="modal-title">{title}</h2>
                {fields.iter().map(|field| {
                    let field = *field;
                    view! {
                        <label class="form-field">
                            <span class="form-label">{field.label}</span>
                            <input
                                type="text"
                                prop:value=move || raw.with(|m| m.get(field.name).cloned().unwrap_or_default())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    raw.update(|m| { m.insert(field.name, value.clone()); });
                                    on_input.run((field, value));
                                }
                            />
                        </label>
                    }
                }).collect_view()}
                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary">{submit_label}</button>
                    <button type="button" class="btn btn-secondary" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                </div>
            </form>
        </div>
    }
}
