//! Entity Table Component
//!
//! One CRUD view for any entity schema: id filter, paginated table, add and
//! edit forms. Loads its collection once on mount; each create/update outcome
//! goes through the view's `FormState`, which reconciles the list state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use list_manager::{EntitySchema, FieldDef, FormState, ListState, RecordId};

use crate::commands;
use crate::components::{DeleteConfirmButton, PaginationBar, RecordForm};
use crate::context::use_console_context;
use crate::store::{report_failure, report_success, use_console_store};

#[component]
pub fn EntityTable(schema: EntitySchema) -> impl IntoView {
    let ctx = use_console_context();
    let store = use_console_store();

    let page_size = ctx.config.with_value(|c| c.default_page_size);
    let page_sizes = ctx.config.with_value(|c| c.page_sizes());
    let state = RwSignal::new(ListState::new(page_size, schema.empty_filter));
    let form = RwSignal::new(FormState::new(&schema));
    let (filter_text, set_filter_text) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let key = schema.key;
    let title = schema.title;
    let noun = schema.noun;
    let fields: &'static [FieldDef] = schema.fields;
    let schema = StoredValue::new(schema);

    // Fetch everything; a failure leaves whatever was shown before
    let load = move || {
        let schema = schema.get_value();
        let base_url = ctx.base_url.get_value();
        set_loading.set(true);
        spawn_local(async move {
            match commands::list_records(&base_url, &schema).await {
                Ok(records) => state.update(|s| s.replace_collection(records)),
                Err(e) => report_failure(store, key, "cargar la lista", &e),
            }
            set_loading.set(false);
        });
    };

    // Load on mount
    Effect::new(move |_| load());

    let create = move || {
        let schema = schema.get_value();
        let base_url = ctx.base_url.get_value();
        let pending = form.with_untracked(|f| f.draft().clone());
        spawn_local(async move {
            let result = commands::create_record(&base_url, &schema, &pending).await;
            // form stays open with the typed values on failure
            match form.try_update(|f| state.try_update(|s| f.on_create_result(s, result))).flatten() {
                Some(Ok(id)) => report_success(store, key, format!("{} #{} agregado", noun, id)),
                Some(Err(e)) => report_failure(store, key, "agregar", &e),
                None => {}
            }
        });
    };

    let update = move || {
        let edited = match state.with_untracked(|s| form.with_untracked(|f| f.pending_update(s))) {
            Ok(Some(edited)) => edited,
            Ok(None) => return,
            Err(e) => {
                report_failure(store, key, "actualizar", &e);
                return;
            }
        };
        let schema = schema.get_value();
        let base_url = ctx.base_url.get_value();
        spawn_local(async move {
            let id = edited.id;
            let result = commands::update_record(&base_url, &schema, edited.clone()).await;
            match form.try_update(|f| state.try_update(|s| f.on_update_result(s, edited, result))).flatten() {
                Some(Ok(())) => report_success(store, key, format!("{} #{} actualizado", noun, id)),
                Some(Err(e)) => report_failure(store, key, "actualizar", &e),
                None => {}
            }
        });
    };

    let open_edit = move |id: RecordId| {
        let opened = state.with_untracked(|s| form.try_update(|f| f.open_edit(s, id)));
        if let Some(Err(e)) = opened {
            report_failure(store, key, "editar", &e);
        }
    };

    let delete = move |id: RecordId| {
        let schema = schema.get_value();
        let base_url = ctx.base_url.get_value();
        spawn_local(async move {
            match commands::delete_record(&base_url, &schema, id).await {
                Ok(mutation) => {
                    state.update(|s| {
                        s.apply(mutation);
                    });
                    report_success(store, key, format!("{} #{} eliminado", noun, id));
                }
                Err(e) => report_failure(store, key, "eliminar", &e),
            }
        });
    };

    let on_filter = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = filter_text.get_untracked();
        state.update(|s| {
            s.apply_filter(&raw);
        });
    };

    let rows = move || {
        state
            .with(|s| s.visible_page())
            .into_iter()
            .map(|record| {
                let id = record.id;
                view! {
                    <tr>
                        <td class="cell-id">{id}</td>
                        {fields.iter().map(|f| view! { <td>{record.display(f.name)}</td> }).collect_view()}
                        <td class="cell-actions">
                            <DeleteConfirmButton on_confirm=move |_| delete(id) />
                            <button
                                class="btn btn-primary"
                                on:click=move |_| open_edit(id)
                            >
                                "Actualizar"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <section class="entity-table">
            <h1>{title}</h1>

            <div class="toolbar">
                <form class="filter-form" on:submit=on_filter>
                    <input
                        type="text"
                        placeholder="Filtrar por ID"
                        prop:value=move || filter_text.get()
                        on:input=move |ev| set_filter_text.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn btn-primary">"Filtrar"</button>
                </form>
                <button class="btn btn-primary" on:click=move |_| form.update(|f| f.open_add())>
                    "Agregar Nuevo " {noun}
                </button>
                <button class="btn" disabled=move || loading.get() on:click=move |_| load()>
                    "Recargar"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="loading">"Cargando..."</div>
            </Show>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        {fields.iter().map(|f| view! { <th>{f.label}</th> }).collect_view()}
                        <th>"Acciones"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>

            <PaginationBar state=state page_sizes=page_sizes />

            <Show when=move || form.with(|f| f.is_add_open())>
                <RecordForm
                    title=format!("Agregar Nuevo {}", noun)
                    fields=fields
                    initial=form.with_untracked(|f| fields.iter().map(|field| f.draft().display(field.name)).collect())
                    submit_label=format!("Agregar {}", noun)
                    on_input=move |(field, value): (FieldDef, String)| form.update(|f| f.set_draft_field(&field, &value))
                    on_submit=move |_| create()
                    on_cancel=move |_| form.update(|f| f.cancel_add())
                />
            </Show>

            <Show when=move || form.with(|f| f.is_edit_open())>
                <RecordForm
                    title=format!("Editar {}", noun)
                    fields=fields
                    initial=form.with_untracked(|f| {
                        fields
                            .iter()
                            .map(|field| f.edit_buffer().map(|r| r.display(field.name)).unwrap_or_default())
                            .collect()
                    })
                    submit_label="Guardar Cambios"
                    on_input=move |(field, value): (FieldDef, String)| form.update(|f| f.set_edit_field(&field, &value))
                    on_submit=move |_| update()
                    on_cancel=move |_| form.update(|f| f.cancel_edit())
                />
            </Show>
        </section>
    }
}
