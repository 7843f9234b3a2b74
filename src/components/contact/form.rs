//! Contact form state and the simulated submit flow.
//!
//! Submitting fakes network latency, shows a success state for a while, then
//! returns to idle. Each delayed step carries a [`Ticket`]; cancelling the flow
//! invalidates every outstanding ticket, so a timer that still fires after the
//! form is gone changes nothing.

use std::time::Duration;

/// Fake round-trip before a submission counts as delivered.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);
/// How long the success state stays up before the form unlocks.
pub const SUCCESS_HOLD: Duration = Duration::from_millis(3000);

/// The four form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactMessage {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
}

impl ContactMessage {
	/// All required fields hold something other than whitespace.
	pub fn is_complete(&self) -> bool {
		[&self.name, &self.email, &self.subject, &self.message]
			.iter()
			.all(|f| !f.trim().is_empty())
	}
}

/// Visible state of the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
	#[default]
	Idle,
	Submitting,
	Sent,
}

impl SubmitPhase {
	/// Submitting and success both lock the button.
	pub fn locks_form(self) -> bool {
		self != SubmitPhase::Idle
	}

	pub fn label(self) -> &'static str {
		match self {
			SubmitPhase::Idle => "Send Message",
			SubmitPhase::Submitting => "Sending...",
			SubmitPhase::Sent => "Message Sent",
		}
	}
}

/// Proof that a delayed step belongs to the current submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Ticketed submit state machine: `Idle -> Submitting -> Sent -> Idle`.
#[derive(Debug, Default)]
pub struct SubmitFlow {
	phase: SubmitPhase,
	generation: u64,
}

impl SubmitFlow {
	pub fn phase(&self) -> SubmitPhase {
		self.phase
	}

	/// Starts a submission. `None` while one is already in flight or showing success.
	pub fn begin(&mut self) -> Option<Ticket> {
		if self.phase != SubmitPhase::Idle {
			return None;
		}
		self.generation += 1;
		self.phase = SubmitPhase::Submitting;
		Some(Ticket(self.generation))
	}

	/// Marks the submission delivered and returns the ticket for the reset step.
	pub fn deliver(&mut self, ticket: Ticket) -> Option<Ticket> {
		if self.phase != SubmitPhase::Submitting || ticket.0 != self.generation {
			return None;
		}
		self.phase = SubmitPhase::Sent;
		Some(ticket)
	}

	/// Ends the success hold. Returns whether the ticket was still current.
	pub fn settle(&mut self, ticket: Ticket) -> bool {
		if self.phase != SubmitPhase::Sent || ticket.0 != self.generation {
			return false;
		}
		self.phase = SubmitPhase::Idle;
		true
	}

	/// Abandons the current submission; every outstanding ticket goes stale.
	pub fn cancel(&mut self) {
		self.generation += 1;
		self.phase = SubmitPhase::Idle;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[test]
	fn test_full_cycle() {
		let mut flow = SubmitFlow::default();

		let ticket = flow.begin().unwrap();
		assert_eq!(flow.phase(), SubmitPhase::Submitting);
		assert!(flow.begin().is_none());

		let reset = flow.deliver(ticket).unwrap();
		assert_eq!(flow.phase(), SubmitPhase::Sent);
		assert!(flow.begin().is_none());

		assert!(flow.settle(reset));
		assert_eq!(flow.phase(), SubmitPhase::Idle);
		assert!(flow.begin().is_some());
	}

	#[test]
	fn test_cancel_while_submitting_invalidates_delivery() {
		let mut flow = SubmitFlow::default();
		let ticket = flow.begin().unwrap();

		flow.cancel();

		assert!(flow.deliver(ticket).is_none());
		assert_eq!(flow.phase(), SubmitPhase::Idle);
	}

	#[test]
	fn test_cancel_during_success_invalidates_reset() {
		let mut flow = SubmitFlow::default();
		let ticket = flow.begin().unwrap();
		let reset = flow.deliver(ticket).unwrap();

		flow.cancel();

		assert!(!flow.settle(reset));
	}

	#[test]
	fn test_stale_ticket_from_earlier_submission() {
		let mut flow = SubmitFlow::default();
		let first = flow.begin().unwrap();
		flow.cancel();
		let second = flow.begin().unwrap();

		assert!(flow.deliver(first).is_none());
		assert_eq!(flow.phase(), SubmitPhase::Submitting);
		assert!(flow.deliver(second).is_some());
	}

	#[rstest]
	#[case("Ada", "ada@example.com", "Hello", "Hi there", true)]
	#[case("", "ada@example.com", "Hello", "Hi there", false)]
	#[case("Ada", "ada@example.com", "   ", "Hi there", false)]
	fn test_required_fields(
		#[case] name: &str,
		#[case] email: &str,
		#[case] subject: &str,
		#[case] message: &str,
		#[case] complete: bool,
	) {
		let form = ContactMessage {
			name: name.into(),
			email: email.into(),
			subject: subject.into(),
			message: message.into(),
		};
		assert_eq!(form.is_complete(), complete);
	}

	#[rstest]
	#[case(SubmitPhase::Idle, false, "Send Message")]
	#[case(SubmitPhase::Submitting, true, "Sending...")]
	#[case(SubmitPhase::Sent, true, "Message Sent")]
	fn test_button_state(#[case] phase: SubmitPhase, #[case] locked: bool, #[case] label: &str) {
		assert_eq!(phase.locks_form(), locked);
		assert_eq!(phase.label(), label);
	}
}
