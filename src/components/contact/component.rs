//! Contact section: contact details, the message form, and the angel backdrop.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;
use send_wrapper::SendWrapper;

use super::form::{ContactMessage, SUBMIT_LATENCY, SUCCESS_HOLD, SubmitFlow, SubmitPhase};
use super::timer::TimerSlot;
use crate::components::backdrop::AngelCanvas;

const INPUT_CLASS: &str = "contact-input";

/// Contact details and a message form with a simulated send.
#[component]
pub fn ContactSection() -> impl IntoView {
	let message = RwSignal::new(ContactMessage::default());
	let phase = RwSignal::new(SubmitPhase::Idle);
	let flow = Rc::new(RefCell::new(SubmitFlow::default()));
	let timers = Rc::new(RefCell::new(TimerSlot::default()));

	let (flow_submit, timers_submit) = (flow.clone(), timers.clone());
	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();
		if !message.with_untracked(ContactMessage::is_complete) {
			return;
		}
		let Some(ticket) = flow_submit.borrow_mut().begin() else {
			return;
		};
		phase.set(SubmitPhase::Submitting);

		let (flow_sent, timers_sent) = (flow_submit.clone(), timers_submit.clone());
		timers_submit.borrow_mut().schedule(SUBMIT_LATENCY, move || {
			let Some(reset) = flow_sent.borrow_mut().deliver(ticket) else {
				return;
			};
			info!("contact: message sent");
			phase.set(SubmitPhase::Sent);
			message.set(ContactMessage::default());

			let flow_reset = flow_sent.clone();
			timers_sent.borrow_mut().schedule(SUCCESS_HOLD, move || {
				if flow_reset.borrow_mut().settle(reset) {
					phase.set(SubmitPhase::Idle);
				}
			});
		});
	};

	let pending = SendWrapper::new((flow, timers));
	on_cleanup(move || {
		let (flow, timers) = &*pending;
		flow.borrow_mut().cancel();
		timers.borrow_mut().cancel();
	});

	view! {
		<section id="contact" class="contact-section" style="position: relative; overflow: hidden;">
			<AngelCanvas />

			<div class="contact-content" style="position: relative; z-index: 10;">
				<header class="contact-header">
					<h2>"Get in Touch"</h2>
					<h3>"Contact Me"</h3>
					<p>
						"Have a project in mind or want to discuss AI-powered solutions? "
						"I'm here to answer your questions and help bring your ideas to life."
					</p>
				</header>

				<div class="contact-grid">
					<aside class="contact-info glass-card">
						<h4>"Contact Information"</h4>
						<dl>
							<dt>"Email"</dt>
							<dd>
								<a href="mailto:hello@example.com">"hello@example.com"</a>
							</dd>
							<dt>"Phone"</dt>
							<dd>
								<a href="tel:+10000000000">"+1 000 000 0000"</a>
							</dd>
							<dt>"Location"</dt>
							<dd>"Remote"</dd>
						</dl>
					</aside>

					<form class="contact-form glass-card" on:submit=on_submit>
						<h4>"Send Me a Message"</h4>

						<label for="name">"Your Name"</label>
						<input
							id="name"
							name="name"
							type="text"
							required
							class=INPUT_CLASS
							placeholder="John Doe"
							prop:value=move || message.with(|m| m.name.clone())
							on:input=move |ev| message.update(|m| m.name = event_target_value(&ev))
						/>

						<label for="email">"Your Email"</label>
						<input
							id="email"
							name="email"
							type="email"
							required
							class=INPUT_CLASS
							placeholder="john@example.com"
							prop:value=move || message.with(|m| m.email.clone())
							on:input=move |ev| message.update(|m| m.email = event_target_value(&ev))
						/>

						<label for="subject">"Subject"</label>
						<input
							id="subject"
							name="subject"
							type="text"
							required
							class=INPUT_CLASS
							placeholder="Project Inquiry"
							prop:value=move || message.with(|m| m.subject.clone())
							on:input=move |ev| message.update(|m| m.subject = event_target_value(&ev))
						/>

						<label for="message">"Message"</label>
						<textarea
							id="message"
							name="message"
							rows="5"
							required
							class=INPUT_CLASS
							placeholder="I'm interested in discussing a web or AI project..."
							prop:value=move || message.with(|m| m.message.clone())
							on:input=move |ev| message.update(|m| m.message = event_target_value(&ev))
						></textarea>

						<button
							type="submit"
							class=move || {
								if phase.get() == SubmitPhase::Sent {
									"contact-submit contact-submit-sent"
								} else {
									"contact-submit"
								}
							}
							disabled=move || phase.get().locks_form()
						>
							{move || phase.get().label()}
						</button>

						{move || {
							(phase.get() == SubmitPhase::Sent)
								.then(|| {
									view! {
										<p class="contact-status" role="status">
											"Message sent successfully! I'll get back to you as soon as possible."
										</p>
									}
								})
						}}
					</form>
				</div>
			</div>
		</section>
	}
}
