//! Modal form for registering a newly received device.
//!
//! DESIGN
//! ======
//! The form edits a local `IntakeDraft`; only Save touches the store. On a
//! validation failure the dialog stays open and names the missing fields.

use leptos::prelude::*;
use tickets::intake::{IntakeDraft, IntakeError};
use tickets::{STATUSES, TECHNICIANS};

use crate::state::desk::DeskState;
use crate::state::ui::{UiState, selection};
use crate::util::clock;

#[cfg(test)]
#[path = "intake_dialog_test.rs"]
mod intake_dialog_test;

/// Free-text inputs of the intake form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftText {
    Customer,
    Phone,
    Brand,
    Model,
    Serial,
    Issue,
}

impl DraftText {
    pub fn label(self) -> &'static str {
        match self {
            Self::Customer => "Müşteri Adı",
            Self::Phone => "Telefon",
            Self::Brand => "Marka",
            Self::Model => "Model",
            Self::Serial => "Seri No",
            Self::Issue => "Arıza Açıklaması",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Customer => "Ad Soyad",
            Self::Phone => "05xx xxx xx xx",
            Self::Brand => "Örn. Apple",
            Self::Model => "Örn. iPhone 13",
            Self::Serial => "Seri numarası",
            Self::Issue => "Cihaz problemi...",
        }
    }

    pub fn get(self, draft: &IntakeDraft) -> &str {
        match self {
            Self::Customer => &draft.customer,
            Self::Phone => &draft.phone,
            Self::Brand => &draft.brand,
            Self::Model => &draft.model,
            Self::Serial => &draft.serial,
            Self::Issue => &draft.issue,
        }
    }

    pub fn slot(self, draft: &mut IntakeDraft) -> &mut String {
        match self {
            Self::Customer => &mut draft.customer,
            Self::Phone => &mut draft.phone,
            Self::Brand => &mut draft.brand,
            Self::Model => &mut draft.model,
            Self::Serial => &mut draft.serial,
            Self::Issue => &mut draft.issue,
        }
    }
}

/// Message shown under the form after a failed save.
pub fn error_message(err: &IntakeError) -> String {
    match err {
        IntakeError::MissingFields(fields) => {
            let names: Vec<&str> = fields.iter().map(|f| f.label()).collect();
            format!("Zorunlu alanlar boş: {}", names.join(", "))
        }
        IntakeError::Store(e) => format!("Kayıt eklenemedi: {e}"),
    }
}

#[component]
fn DraftInput(draft: RwSignal<IntakeDraft>, field: DraftText, #[prop(optional)] wide: bool) -> impl IntoView {
    view! {
        <label class="dialog__label" class:dialog__label--wide=wide>
            {field.label()}
            <input
                class="dialog__input"
                placeholder=field.placeholder()
                prop:value=move || draft.with(|d| field.get(d).to_owned())
                on:input=move |ev| draft.update(|d| *field.slot(d) = event_target_value(&ev))
            />
        </label>
    }
}

/// Intake dialog, mounted by the panel page while `UiState::intake_open` is set.
#[component]
pub fn IntakeDialog() -> impl IntoView {
    let desk = expect_context::<RwSignal<DeskState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let draft = RwSignal::new(IntakeDraft::default());
    let error = RwSignal::new(None::<String>);

    let close = move || ui.update(|u| u.intake_open = false);

    let on_save = move |_| {
        let submitted = draft.get_untracked();
        match desk.try_update(|d| d.submit_intake(submitted, clock::now())) {
            Some(Ok(_id)) => {
                draft.set(IntakeDraft::default());
                error.set(None);
                close();
            }
            Some(Err(e)) => error.set(Some(error_message(&e))),
            None => {}
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div
                class="dialog dialog--intake"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        close();
                    }
                }
            >
                <h2 class="dialog__title">"Yeni Ürün Kaydı"</h2>
                <p class="dialog__subtitle">"Müşteri ve cihaz bilgilerini girin"</p>
                <div class="dialog__grid">
                    <DraftInput draft=draft field=DraftText::Customer/>
                    <DraftInput draft=draft field=DraftText::Phone/>
                    <DraftInput draft=draft field=DraftText::Brand/>
                    <DraftInput draft=draft field=DraftText::Model/>
                    <DraftInput draft=draft field=DraftText::Serial wide=true/>
                    <label class="dialog__label dialog__label--wide">
                        {DraftText::Issue.label()}
                        <textarea
                            class="dialog__textarea"
                            placeholder=DraftText::Issue.placeholder()
                            prop:value=move || draft.with(|d| d.issue.clone())
                            on:input=move |ev| draft.update(|d| d.issue = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Teknisyen"
                        <select
                            class="dialog__select"
                            on:change=move |ev| draft.update(|d| d.technician = selection(event_target_value(&ev)))
                        >
                            <option value="">"Seçin"</option>
                            {TECHNICIANS.iter().map(|&t| view! { <option value=t>{t}</option> }).collect_view()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Durum"
                        <select
                            class="dialog__select"
                            on:change=move |ev| draft.update(|d| d.status = selection(event_target_value(&ev)))
                        >
                            {STATUSES.iter().map(|s| view! { <option value=s.key>{s.label}</option> }).collect_view()}
                        </select>
                    </label>
                </div>
                {move || error.get().map(|msg| view! { <p class="dialog__error">{msg}</p> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| close()>
                        "İptal"
                    </button>
                    <button class="btn btn--primary" on:click=on_save>
                        "Kaydet"
                    </button>
                </div>
            </div>
        </div>
    }
}
