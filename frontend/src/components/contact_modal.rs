use yew::prelude::*;
use log::{info, warn};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use crate::components::contact_form::{submit_contact, ContactForm, Field, GameType, SubmitStatus};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ContactModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
}

pub enum ContactModalMsg {
    SetField(Field, String),
    Submit,
    Submitted(Result<(), String>),
    /// Close and keep what was typed.
    Cancel,
    /// Close and start over next time.
    Dismiss,
}

pub struct ContactModal {
    form: ContactForm,
    status: SubmitStatus,
}

impl Component for ContactModal {
    type Message = ContactModalMsg;
    type Properties = ContactModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: ContactForm::default(),
            status: SubmitStatus::Idle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            ContactModalMsg::SetField(field, value) => {
                self.form.set(field, value);
                true
            }
            ContactModalMsg::Submit => {
                if self.status.is_submitting() || !self.form.is_complete() {
                    return false;
                }
                self.status = SubmitStatus::Submitting;
                let request = self.form.to_request();
                ctx.link().send_future(async move {
                    ContactModalMsg::Submitted(submit_contact(request).await)
                });
                true
            }
            ContactModalMsg::Submitted(result) => {
                self.status = match result {
                    Ok(()) => {
                        info!("Contact message sent");
                        SubmitStatus::Success
                    }
                    Err(e) => {
                        warn!("Contact message failed: {}", e);
                        SubmitStatus::Error(e)
                    }
                };
                true
            }
            ContactModalMsg::Cancel => {
                ctx.props().on_close.emit(());
                false
            }
            ContactModalMsg::Dismiss => {
                ctx.props().on_close.emit(());
                self.form = ContactForm::default();
                self.status = SubmitStatus::Idle;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().open {
            return html! {};
        }

        let link = ctx.link();
        let on_backdrop = link.callback(|_: MouseEvent| ContactModalMsg::Cancel);
        let on_dismiss = link.callback(|_: MouseEvent| ContactModalMsg::Dismiss);
        let sent = self.status == SubmitStatus::Success;

        html! {
            <div class="contact-modal-root">
                <div class="contact-backdrop" onclick={on_backdrop}></div>
                <div class="contact-modal" role="dialog" aria-modal="true">
                    <div class="contact-modal-header">
                        <div>
                            <h2>{"Let's Talk Player Insights"}</h2>
                            <p>{"Tell us about your project and we'll get back to you within 24 hours"}</p>
                        </div>
                        <button class="contact-close" aria-label="Close" onclick={on_dismiss}>{"✕"}</button>
                    </div>
                    <div class="contact-modal-body">
                        if sent {
                            <div class="contact-success">
                                <div class="contact-success-icon">{"💬"}</div>
                                <h3>{"Message Sent Successfully!"}</h3>
                                <p>{"We'll get back to you within 24 hours."}</p>
                            </div>
                        } else {
                            { self.view_form(ctx) }
                        }
                    </div>
                </div>
                <style>{CONTACT_MODAL_CSS}</style>
            </div>
        }
    }
}

impl ContactModal {
    fn view_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            ContactModalMsg::Submit
        });
        let on_cancel = link.callback(|_: MouseEvent| ContactModalMsg::Cancel);

        let text_input = |field: Field| {
            link.callback(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                ContactModalMsg::SetField(field, input.value())
            })
        };
        let on_game_type = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            ContactModalMsg::SetField(Field::GameType, select.value())
        });
        let on_message = link.callback(|e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            ContactModalMsg::SetField(Field::Message, area.value())
        });

        let submitting = self.status.is_submitting();
        let selected = self.form.game_type.map(GameType::value).unwrap_or("");

        html! {
            <form class="contact-form" onsubmit={on_submit}>
                <label>
                    {"Name *"}
                    <input type="text" name="name" required={true} placeholder="Your name"
                        value={self.form.name.clone()} oninput={text_input(Field::Name)} />
                </label>
                <label>
                    {"Email *"}
                    <input type="email" name="email" required={true} placeholder="your@email.com"
                        value={self.form.email.clone()} oninput={text_input(Field::Email)} />
                </label>
                <div class="contact-row">
                    <label>
                        {"Company"}
                        <input type="text" name="company" placeholder="Your company"
                            value={self.form.company.clone()} oninput={text_input(Field::Company)} />
                    </label>
                    <label>
                        {"Game Type"}
                        <select name="gameType" onchange={on_game_type}>
                            <option value="" selected={selected.is_empty()}>{"Select game type"}</option>
                            { for GameType::ALL.iter().map(|g| html! {
                                <option value={g.value()} selected={selected == g.value()}>{ g.label() }</option>
                            }) }
                        </select>
                    </label>
                </div>
                <label>
                    {"Project Details *"}
                    <textarea name="message" rows="4" required={true}
                        placeholder="Tell us about your game, what stage you're in, and what insights you're looking for..."
                        value={self.form.message.clone()} oninput={on_message} />
                </label>

                <div class="contact-direct">
                    <h4>{"Prefer to reach out directly?"}</h4>
                    <a href={config::contact_mailto()}>{"✉ "}{config::CONTACT_EMAIL}</a>
                    <a href={config::BOOKING_URL} target="_blank" rel="noopener noreferrer">{"☎ Schedule a call"}</a>
                </div>

                if let SubmitStatus::Error(error) = &self.status {
                    <div class="contact-error">{ error.clone() }</div>
                }

                <div class="contact-actions">
                    <button type="button" class="contact-cancel" onclick={on_cancel}>{"Cancel"}</button>
                    <button type="submit" class="contact-send" disabled={submitting || !self.form.is_complete()}>
                        if submitting {
                            <span class="contact-spinner"></span>{"Sending..."}
                        } else {
                            {"Send Message"}
                        }
                    </button>
                </div>
            </form>
        }
    }
}

const CONTACT_MODAL_CSS: &str = r#"
    .contact-modal-root {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        overflow-y: auto;
    }
    .contact-backdrop {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.6);
        backdrop-filter: blur(4px);
        animation: contactFade 0.3s ease-out;
    }
    .contact-modal {
        position: relative;
        width: 100%;
        max-width: 42rem;
        max-height: 90vh;
        overflow-y: auto;
        background: linear-gradient(135deg, rgba(30, 27, 75, 0.95), rgba(59, 7, 100, 0.95), rgba(80, 7, 36, 0.95));
        border: 1px solid rgba(112, 26, 117, 0.2);
        border-radius: 1rem;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
        animation: contactPop 0.3s ease-out;
    }
    @keyframes contactFade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes contactPop {
        from { opacity: 0; transform: scale(0.95); }
        to { opacity: 1; transform: scale(1); }
    }
    .contact-modal-header {
        position: sticky;
        top: 0;
        display: flex;
        justify-content: space-between;
        align-items: flex-start;
        gap: 1rem;
        padding: 1.5rem;
        background: linear-gradient(90deg, rgba(124, 58, 237, 0.1), rgba(192, 38, 211, 0.1));
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(112, 26, 117, 0.2);
    }
    .contact-modal-header h2 {
        margin: 0 0 0.5rem;
        font-size: 1.5rem;
    }
    .contact-modal-header p {
        margin: 0;
        color: #d1d5db;
        font-size: 0.875rem;
    }
    .contact-close {
        background: none;
        border: none;
        color: #9ca3af;
        font-size: 1.25rem;
        cursor: pointer;
        padding: 0.5rem;
        border-radius: 0.5rem;
    }
    .contact-close:hover {
        color: #fff;
        background: rgba(255, 255, 255, 0.1);
    }
    .contact-modal-body {
        padding: 1.5rem;
    }
    .contact-form {
        display: flex;
        flex-direction: column;
        gap: 1.25rem;
    }
    .contact-form label {
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
        font-size: 0.875rem;
        font-weight: 600;
        color: #d1d5db;
    }
    .contact-form input,
    .contact-form select,
    .contact-form textarea {
        padding: 0.75rem 1rem;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid #4b5563;
        border-radius: 0.5rem;
        color: #fff;
        font-size: 1rem;
        font-family: inherit;
    }
    .contact-form textarea {
        resize: none;
    }
    .contact-form option {
        background: #1f2937;
    }
    .contact-form input:focus,
    .contact-form select:focus,
    .contact-form textarea:focus {
        outline: none;
        border-color: #d946ef;
    }
    .contact-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1.25rem;
    }
    .contact-direct {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        padding: 1rem;
        border-radius: 0.5rem;
        border: 1px solid rgba(112, 26, 117, 0.2);
        background: linear-gradient(90deg, rgba(124, 58, 237, 0.1), rgba(192, 38, 211, 0.1));
        font-size: 0.875rem;
    }
    .contact-direct h4 {
        width: 100%;
        margin: 0;
    }
    .contact-direct a {
        color: #d1d5db;
        text-decoration: none;
    }
    .contact-direct a:hover {
        color: #e879f9;
    }
    .contact-error {
        color: #fca5a5;
        font-size: 0.875rem;
    }
    .contact-actions {
        display: flex;
        gap: 1rem;
        padding-top: 1rem;
    }
    .contact-actions button {
        flex: 1;
        padding: 0.75rem 1.5rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 600;
        font-size: 1rem;
        color: #fff;
        cursor: pointer;
    }
    .contact-cancel {
        background: rgba(75, 85, 99, 0.2);
        color: #d1d5db;
    }
    .contact-send {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 0.5rem;
        background: linear-gradient(90deg, #7c3aed, #c026d3);
    }
    .contact-send:disabled {
        background: #4b5563;
        cursor: not-allowed;
    }
    .contact-spinner {
        display: inline-block;
        width: 1rem;
        height: 1rem;
        border: 2px solid rgba(255, 255, 255, 0.3);
        border-top-color: #fff;
        border-radius: 50%;
        animation: spin 1s linear infinite;
    }
    @keyframes spin { to { transform: rotate(360deg); } }
    .contact-success {
        text-align: center;
        padding: 3rem 0;
        animation: contactFade 0.4s ease-out;
    }
    .contact-success-icon {
        width: 4rem;
        height: 4rem;
        margin: 0 auto 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        border-radius: 50%;
        background: rgba(34, 197, 94, 0.2);
        font-size: 1.75rem;
    }
    .contact-success p {
        color: #d1d5db;
    }
    @media (max-width: 640px) {
        .contact-row {
            grid-template-columns: 1fr;
        }
        .contact-actions {
            flex-direction: column;
        }
        .contact-modal-header,
        .contact-modal-body {
            padding: 1rem;
        }
    }
"#;
