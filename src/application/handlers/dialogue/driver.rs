//! DialogueDriver - Runs the intake form, one inbound event at a time.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::errors::DialogueError;
use super::locks::ConversationLocks;
use super::scope::ConversationScope;
use crate::domain::foundation::{ConversationId, EventId, RecipientId, StateMachine};
use crate::domain::intake::prompts;
use crate::domain::intake::{
    Field, InboundEvent, IntakeState, MenuToken, OutboundMessage, Payload, SubmissionPolicy,
};
use crate::ports::{ConversationStore, MessageGateway};

/// What a step asks the driver to do with the conversation afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Stay on the current step.
    Stay,
    /// Move to another step.
    Advance(IntakeState),
    /// Request delivered: forget the conversation.
    Finish,
    /// Forget the conversation and wait on the welcome menu again.
    Restart,
}

/// The intake form state machine.
///
/// Built once at startup and shared by reference with every transport
/// handler.
pub struct DialogueDriver {
    store: Arc<dyn ConversationStore>,
    gateway: Arc<dyn MessageGateway>,
    doctors: RecipientId,
    policy: SubmissionPolicy,
    locks: ConversationLocks,
}

impl DialogueDriver {
    pub fn new(
        store: Arc<dyn ConversationStore>,
        gateway: Arc<dyn MessageGateway>,
        doctors: RecipientId,
        policy: SubmissionPolicy,
    ) -> Self {
        Self {
            store,
            gateway,
            doctors,
            policy,
            locks: ConversationLocks::new(),
        }
    }

    /// Processes one event to completion and returns the conversation's new step.
    ///
    /// Field changes made by the step are written back even when sending
    /// fails; the step itself only changes once every message went out.
    ///
    /// # Errors
    /// `DialogueError::Delivery` when a message could not be sent (the step
    /// is left unchanged), `DialogueError::Store` when the store fails.
    pub async fn handle(&self, event: InboundEvent) -> Result<IntakeState, DialogueError> {
        let conversation_id = event.conversation_id();
        let event_id = EventId::new();
        let _turn = self.locks.acquire(conversation_id).await;

        let mut scope = ConversationScope::open(self.store.as_ref(), conversation_id).await?;
        let from = scope.state();
        debug!(
            %event_id,
            %conversation_id,
            state = %from,
            kind = event.kind(),
            "Handling intake event"
        );

        let stepped = self.step(&mut scope, &event).await;
        let written = scope.write_back(self.store.as_ref()).await;
        let outcome = match stepped {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(store_error) = written {
                    warn!(
                        %event_id,
                        %conversation_id,
                        error = %store_error,
                        "Answers not saved after failed step"
                    );
                }
                return Err(e);
            }
        };
        written?;

        let to = self.apply(conversation_id, from, outcome).await?;
        if to != from {
            info!(%event_id, %conversation_id, %from, %to, "Intake step changed");
        }
        Ok(to)
    }

    async fn step(
        &self,
        scope: &mut ConversationScope,
        event: &InboundEvent,
    ) -> Result<Outcome, DialogueError> {
        let id = scope.conversation_id();
        let state = scope.state();

        match (state, event.payload()) {
            (IntakeState::None, _) => {
                info!(conversation_id = %id, "Starting intake form");
                self.reply(id, prompts::welcome()).await?;
                Ok(Outcome::Advance(IntakeState::Initial))
            }

            (_, Payload::Menu(MenuToken::Cancel)) => {
                info!(conversation_id = %id, %state, "Intake form cancelled");
                self.reply(id, prompts::welcome()).await?;
                Ok(Outcome::Restart)
            }

            (IntakeState::Initial, Payload::Menu(MenuToken::HelpSelf)) => {
                info!(conversation_id = %id, "Filing for oneself");
                self.ask(id, IntakeState::VictimName).await
            }
            (IntakeState::Initial, Payload::Menu(MenuToken::HelpOther)) => {
                info!(conversation_id = %id, "Filing for someone else");
                self.ask(id, IntakeState::GoodManName).await
            }
            (IntakeState::Initial, _) => {
                debug!(conversation_id = %id, "No branch chosen, repeating welcome");
                self.reply(id, prompts::welcome()).await?;
                Ok(Outcome::Stay)
            }

            (IntakeState::Approve, Payload::Menu(MenuToken::Send)) => {
                self.submit(scope).await?;
                Ok(Outcome::Finish)
            }
            (IntakeState::Approve, Payload::Menu(MenuToken::DoNotSend)) => {
                info!(conversation_id = %id, "Submitter withdrew the request");
                self.reply(id, prompts::welcome()).await?;
                Ok(Outcome::Restart)
            }
            (IntakeState::Approve, _) => {
                self.reply(id, prompts::press_a_button()).await?;
                Ok(Outcome::Stay)
            }

            (_, Payload::Other) => {
                debug!(conversation_id = %id, %state, "Rejecting non-text content");
                self.reply(id, prompts::only_text_allowed()).await?;
                Ok(Outcome::Stay)
            }

            (
                IntakeState::GoodManName | IntakeState::VictimName,
                Payload::Menu(MenuToken::Anonymous),
            ) => self.record_answer(scope, prompts::ANONYMOUS_NAME).await,
            (IntakeState::Questions, Payload::Menu(MenuToken::Skip)) => {
                self.record_answer(scope, "").await
            }
            (_, Payload::Text(text)) => self.record_answer(scope, text).await,

            (_, Payload::Menu(token)) => {
                debug!(conversation_id = %id, %state, %token, "Stale button, repeating prompt");
                if let Some(prompt) = prompts::prompt_for(state) {
                    self.reply(id, prompt).await?;
                }
                Ok(Outcome::Stay)
            }
        }
    }

    /// Stores the answer for the current step and moves on.
    async fn record_answer(
        &self,
        scope: &mut ConversationScope,
        value: &str,
    ) -> Result<Outcome, DialogueError> {
        let id = scope.conversation_id();
        let state = scope.state();
        let Some(field) = state.answer_field() else {
            debug!(conversation_id = %id, %state, "Step takes no answer");
            return Ok(Outcome::Stay);
        };

        info!(conversation_id = %id, %field, "Answer recorded");
        scope.set(field, value);
        if state == IntakeState::Contact {
            scope.set(Field::Comments, "");
        }

        match state.next_question() {
            Some(next) => self.ask(id, next).await,
            None => self.conclude(scope).await,
        }
    }

    async fn ask(&self, id: ConversationId, next: IntakeState) -> Result<Outcome, DialogueError> {
        if let Some(prompt) = prompts::prompt_for(next) {
            self.reply(id, prompt).await?;
        }
        Ok(Outcome::Advance(next))
    }

    /// Called once the comments step is answered or skipped.
    async fn conclude(&self, scope: &ConversationScope) -> Result<Outcome, DialogueError> {
        if self.policy.requires_approval() {
            self.reply(scope.conversation_id(), prompts::review(scope.fields()))
                .await?;
            return Ok(Outcome::Advance(IntakeState::Approve));
        }
        self.submit(scope).await?;
        Ok(Outcome::Finish)
    }

    /// Delivers the report to the doctors, then thanks the submitter.
    ///
    /// A rejected report leaves the submitter a notice so the failure is
    /// visible in the chat; the step stays put for a retry.
    async fn submit(&self, scope: &ConversationScope) -> Result<(), DialogueError> {
        let id = scope.conversation_id();
        let fields = scope.fields();

        if !fields.is_complete() {
            let missing = fields.missing_required();
            warn!(conversation_id = %id, ?missing, "Submitting request with empty answers");
        }

        if let Err(e) = self
            .gateway
            .send_text(self.doctors, prompts::doctors_report(fields))
            .await
        {
            warn!(conversation_id = %id, error = %e, "Request not delivered to doctors");
            if let Err(notice_error) = self
                .gateway
                .send_text(id.into(), prompts::delivery_failed())
                .await
            {
                warn!(
                    conversation_id = %id,
                    error = %notice_error,
                    "Submitter not told about failed delivery"
                );
            }
            return Err(e.into());
        }
        info!(conversation_id = %id, doctors = %self.doctors, "Request delivered to doctors");

        // The doctors already have the request; a lost thank-you must not resend it.
        if let Err(e) = self.gateway.send_text(id.into(), prompts::submitted()).await {
            warn!(conversation_id = %id, error = %e, "Submitter not notified of delivery");
        }
        Ok(())
    }

    async fn reply(&self, id: ConversationId, message: OutboundMessage) -> Result<(), DialogueError> {
        self.gateway.send_text(id.into(), message).await?;
        Ok(())
    }

    async fn apply(
        &self,
        id: ConversationId,
        from: IntakeState,
        outcome: Outcome,
    ) -> Result<IntakeState, DialogueError> {
        match outcome {
            Outcome::Stay => Ok(from),
            Outcome::Advance(to) => {
                from.transition_to(to)?;
                self.store.set_state(id, to).await?;
                Ok(to)
            }
            Outcome::Finish => {
                let to = from.transition_to(IntakeState::None)?;
                self.store.clear(id).await?;
                Ok(to)
            }
            Outcome::Restart => {
                if from.is_active() {
                    from.transition_to(IntakeState::None)?;
                }
                self.store.clear(id).await?;
                let to = IntakeState::None.transition_to(IntakeState::Initial)?;
                self.store.set_state(id, to).await?;
                Ok(to)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::RecordingGateway;
    use crate::adapters::storage::InMemoryConversationStore;
    use crate::domain::intake::{FieldPatch, MenuAttachment};

    const USER: i64 = 1001;
    const DOCTORS: i64 = -100200300;

    struct Harness {
        store: Arc<InMemoryConversationStore>,
        gateway: Arc<RecordingGateway>,
        driver: DialogueDriver,
    }

    impl Harness {
        fn new(policy: SubmissionPolicy) -> Self {
            let store = Arc::new(InMemoryConversationStore::new());
            let gateway = Arc::new(RecordingGateway::new());
            let driver = DialogueDriver::new(
                store.clone(),
                gateway.clone(),
                doctors(),
                policy,
            );
            Self {
                store,
                gateway,
                driver,
            }
        }

        async fn at(policy: SubmissionPolicy, state: IntakeState) -> Self {
            let harness = Self::new(policy);
            harness.store.set_state(user(), state).await.unwrap();
            harness
        }

        async fn text(&self, text: &str) -> Result<IntakeState, DialogueError> {
            self.driver.handle(InboundEvent::text(user(), text)).await
        }

        async fn press(&self, token: MenuToken) -> Result<IntakeState, DialogueError> {
            self.driver.handle(InboundEvent::menu(user(), token)).await
        }

        async fn state(&self) -> IntakeState {
            self.store.get_state(user()).await.unwrap()
        }

        fn last_reply(&self) -> OutboundMessage {
            self.gateway.last_to(user().into()).unwrap()
        }
    }

    fn user() -> ConversationId {
        ConversationId::new(USER)
    }

    fn doctors() -> RecipientId {
        RecipientId::new(DOCTORS).unwrap()
    }

    mod start {
        use super::*;

        #[tokio::test]
        async fn any_event_in_none_shows_welcome() {
            for event in [
                InboundEvent::text(user(), "привет"),
                InboundEvent::menu(user(), MenuToken::NewRequest),
                InboundEvent::other(user()),
            ] {
                let h = Harness::new(SubmissionPolicy::Immediate);
                let state = h.driver.handle(event).await.unwrap();

                assert_eq!(state, IntakeState::Initial);
                assert_eq!(h.last_reply(), prompts::welcome());
            }
        }

        #[tokio::test]
        async fn help_self_asks_for_victim_name() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Initial).await;

            let state = h.press(MenuToken::HelpSelf).await.unwrap();

            assert_eq!(state, IntakeState::VictimName);
            assert!(h.last_reply().text.contains("Укажите имя пострадавшего"));
        }

        #[tokio::test]
        async fn help_other_asks_for_requester_name() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Initial).await;

            let state = h.press(MenuToken::HelpOther).await.unwrap();

            assert_eq!(state, IntakeState::GoodManName);
            assert!(h.last_reply().text.contains("Укажите ваше имя"));
        }

        #[tokio::test]
        async fn text_in_initial_repeats_welcome() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Initial).await;

            let state = h.text("мне нужна помощь").await.unwrap();

            assert_eq!(state, IntakeState::Initial);
            assert_eq!(h.last_reply(), prompts::welcome());
        }

        #[tokio::test]
        async fn non_text_in_initial_repeats_welcome() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Initial).await;

            h.driver.handle(InboundEvent::other(user())).await.unwrap();

            assert_eq!(h.last_reply(), prompts::welcome());
        }
    }

    mod answers {
        use super::*;

        #[tokio::test]
        async fn requester_name_is_stored() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::GoodManName).await;

            let state = h.text("Петр Петров").await.unwrap();

            assert_eq!(state, IntakeState::VictimName);
            let fields = h.store.get_fields(user()).await.unwrap();
            assert_eq!(fields.requester_name, "Петр Петров");
        }

        #[tokio::test]
        async fn anonymous_requester_stores_placeholder() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::GoodManName).await;

            h.press(MenuToken::Anonymous).await.unwrap();

            let fields = h.store.get_fields(user()).await.unwrap();
            assert_eq!(fields.requester_name, prompts::ANONYMOUS_NAME);
            assert_eq!(h.state().await, IntakeState::VictimName);
        }

        #[tokio::test]
        async fn anonymous_victim_moves_to_age() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::VictimName).await;

            let state = h.press(MenuToken::Anonymous).await.unwrap();

            assert_eq!(state, IntakeState::Age);
            assert_eq!(
                h.store.get_fields(user()).await.unwrap().victim_name,
                prompts::ANONYMOUS_NAME
            );
            assert_eq!(h.last_reply(), prompts::ask_age());
        }

        #[tokio::test]
        async fn contact_clears_previous_comments() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Contact).await;
            h.store
                .update_fields(user(), &FieldPatch::new().with(Field::Comments, "старый"))
                .await
                .unwrap();

            let state = h.text("+375291234567").await.unwrap();

            assert_eq!(state, IntakeState::Questions);
            let fields = h.store.get_fields(user()).await.unwrap();
            assert_eq!(fields.contact_method, "+375291234567");
            assert!(fields.comments.is_empty());
            assert!(h.last_reply().menu_spec().unwrap().contains(MenuToken::Skip));
        }

        #[tokio::test]
        async fn empty_text_is_accepted() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::InjuryDate).await;

            let state = h.text("").await.unwrap();

            assert_eq!(state, IntakeState::InjuryList);
            assert!(h.store.get_fields(user()).await.unwrap().injury_date.is_empty());
        }

        #[tokio::test]
        async fn non_text_is_rejected_without_moving() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Age).await;

            let state = h.driver.handle(InboundEvent::other(user())).await.unwrap();

            assert_eq!(state, IntakeState::Age);
            assert_eq!(h.last_reply().text, prompts::ONLY_TEXT_ALLOWED);
        }

        #[tokio::test]
        async fn stale_button_repeats_current_prompt() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Location).await;

            let state = h.press(MenuToken::HelpSelf).await.unwrap();

            assert_eq!(state, IntakeState::Location);
            assert_eq!(h.last_reply(), prompts::ask_location());
            assert!(h.store.get_fields(user()).await.unwrap().location.is_empty());
        }

        #[tokio::test]
        async fn skip_outside_questions_does_not_advance() {
            let h = Harness::at(SubmissionPolicy::Immediate, IntakeState::Age).await;

            let state = h.press(MenuToken::Skip).await.unwrap();

            assert_eq!(state, IntakeState::Age);
        }
    }

    mod store_failures {
        use super::*;
        use crate::ports::ConversationStoreError;
        use async_trait::async_trait;

        /// Store whose answer writes always fail.
        struct AnswersUnavailable(InMemoryConversationStore);

        #[async_trait]
        impl ConversationStore for AnswersUnavailable {
            async fn get_state(
                &self,
                id: ConversationId,
            ) -> Result<IntakeState, ConversationStoreError> {
                self.0.get_state(id).await
            }

            async fn set_state(
                &self,
                id: ConversationId,
                state: IntakeState,
            ) -> Result<(), ConversationStoreError> {
                self.0.set_state(id, state).await
            }

            async fn get_fields(
                &self,
                id: ConversationId,
            ) -> Result<crate::domain::intake::FieldSet, ConversationStoreError> {
                self.0.get_fields(id).await
            }

            async fn update_fields(
                &self,
                _id: ConversationId,
                _patch: &FieldPatch,
            ) -> Result<(), ConversationStoreError> {
                Err(ConversationStoreError::Unavailable("disk full".to_string()))
            }

            async fn clear(&self, id: ConversationId) -> Result<(), ConversationStoreError> {
                self.0.clear(id).await
            }
        }

        async fn driver_at(
            state: IntakeState,
        ) -> (Arc<InMemoryConversationStore>, Arc<RecordingGateway>, DialogueDriver) {
            let inner = InMemoryConversationStore::new();
            inner.set_state(user(), state).await.unwrap();
            let store = Arc::new(inner.clone());
            let gateway = Arc::new(RecordingGateway::new());
            let driver = DialogueDriver::new(
                Arc::new(AnswersUnavailable(inner)),
                gateway.clone(),
                doctors(),
                SubmissionPolicy::Immediate,
            );
            (store, gateway, driver)
        }

        #[tokio::test]
        async fn unsaved_answer_is_a_store_error() {
            let (store, _gateway, driver) = driver_at(IntakeState::Location).await;

            let result = driver.handle(InboundEvent::text(user(), "Минск")).await;

            assert!(matches!(result, Err(DialogueError::Store(_))));
            assert_eq!(store.get_state(user()).await.unwrap(), IntakeState::Location);
        }

        #[tokio::test]
        async fn failed_send_wins_over_failed_save() {
            let (store, gateway, driver) = driver_at(IntakeState::Location).await;
            gateway.fail_deliveries_to(user().into());

            let result = driver.handle(InboundEvent::text(user(), "Минск")).await;

            assert!(matches!(result, Err(DialogueError::Delivery(_))));
            assert_eq!(store.get_state(user()).await.unwrap(), IntakeState::Location);
            assert!(store.get_fields(user()).await.unwrap().location.is_empty());
        }
    }

    mod cancellation {
        use super::*;

        #[tokio::test]
        async fn cancel_from_every_active_state_restarts() {
            for start in IntakeState::ALL.into_iter().filter(|s| s.is_active()) {
                let h = Harness::at(SubmissionPolicy::Confirm, start).await;
                h.store
                    .update_fields(user(), &FieldPatch::new().with(Field::VictimName, "Иван"))
                    .await
                    .unwrap();

                let state = h.press(MenuToken::Cancel).await.unwrap();

                assert_eq!(state, IntakeState::Initial, "from {}", start);
                assert!(h.store.get_fields(user()).await.unwrap().is_blank());
                assert_eq!(h.last_reply(), prompts::welcome());
                assert!(h.gateway.sent_to(doctors()).is_empty());
            }
        }
    }

    mod submission {
        use super::*;

        async fn filled(policy: SubmissionPolicy) -> Harness {
            let h = Harness::at(policy, IntakeState::Questions).await;
            let patch = FieldPatch::new()
                .with(Field::VictimName, "Иван Иванов")
                .with(Field::AgeOrBirthdate, "20 лет")
                .with(Field::InjuryDate, "11.08.2020")
                .with(Field::InjuryList, "гематомы")
                .with(Field::Location, "Минск")
                .with(Field::ContactMethod, "@ivan");
            h.store.update_fields(user(), &patch).await.unwrap();
            h
        }

        #[tokio::test]
        async fn skip_delivers_immediately() {
            let h = filled(SubmissionPolicy::Immediate).await;

            let state = h.press(MenuToken::Skip).await.unwrap();

            assert_eq!(state, IntakeState::None);
            let report = h.gateway.last_to(doctors()).unwrap();
            assert!(report.text.starts_with("#запрос"));
            assert!(!report.text.contains("Вопрос/комментарий"));
            assert_eq!(h.last_reply(), prompts::submitted());
            assert!(h.store.record(user()).await.is_none());
        }

        #[tokio::test]
        async fn comment_is_included_in_report() {
            let h = filled(SubmissionPolicy::Immediate).await;

            h.text("Нужна консультация").await.unwrap();

            let report = h.gateway.last_to(doctors()).unwrap();
            assert!(report
                .text
                .ends_with("Вопрос/комментарий: <b>Нужна консультация</b>"));
        }

        #[tokio::test]
        async fn confirm_policy_shows_review_first() {
            let h = filled(SubmissionPolicy::Confirm).await;

            let state = h.press(MenuToken::Skip).await.unwrap();

            assert_eq!(state, IntakeState::Approve);
            assert!(h.gateway.sent_to(doctors()).is_empty());
            let review = h.last_reply();
            assert!(review.text.contains("#запрос"));
            assert_eq!(
                review.menu_spec().unwrap().tokens(),
                vec![MenuToken::Send, MenuToken::DoNotSend]
            );
        }

        #[tokio::test]
        async fn send_delivers_and_clears() {
            let h = filled(SubmissionPolicy::Confirm).await;
            h.press(MenuToken::Skip).await.unwrap();

            let state = h.press(MenuToken::Send).await.unwrap();

            assert_eq!(state, IntakeState::None);
            assert_eq!(h.gateway.sent_to(doctors()).len(), 1);
            assert!(h.store.get_fields(user()).await.unwrap().is_blank());
        }

        #[tokio::test]
        async fn do_not_send_restarts_without_delivery() {
            let h = filled(SubmissionPolicy::Confirm).await;
            h.press(MenuToken::Skip).await.unwrap();

            let state = h.press(MenuToken::DoNotSend).await.unwrap();

            assert_eq!(state, IntakeState::Initial);
            assert!(h.gateway.sent_to(doctors()).is_empty());
            assert!(h.store.get_fields(user()).await.unwrap().is_blank());
            assert_eq!(h.last_reply(), prompts::welcome());
        }

        #[tokio::test]
        async fn text_in_approve_asks_for_a_button() {
            let h = Harness::at(SubmissionPolicy::Confirm, IntakeState::Approve).await;

            let state = h.text("отправь").await.unwrap();

            assert_eq!(state, IntakeState::Approve);
            assert_eq!(h.last_reply().text, prompts::PRESS_A_BUTTON);
            assert_eq!(h.last_reply().menu, MenuAttachment::Keep);
        }

        #[tokio::test]
        async fn failed_delivery_keeps_step_and_answer() {
            let h = filled(SubmissionPolicy::Immediate).await;
            h.gateway.fail_deliveries_to(doctors());

            let result = h.text("вопрос").await;

            assert!(matches!(result, Err(DialogueError::Delivery(_))));
            assert_eq!(h.state().await, IntakeState::Questions);
            assert_eq!(h.store.get_fields(user()).await.unwrap().comments, "вопрос");
            assert_eq!(h.gateway.sent_to(user().into()), vec![prompts::delivery_failed()]);
        }

        #[tokio::test]
        async fn failed_delivery_after_approval_notifies_submitter() {
            let h = filled(SubmissionPolicy::Confirm).await;
            h.press(MenuToken::Skip).await.unwrap();
            h.gateway.fail_deliveries_to(doctors());

            let result = h.press(MenuToken::Send).await;

            assert!(matches!(result, Err(DialogueError::Delivery(_))));
            assert_eq!(h.state().await, IntakeState::Approve);
            assert_eq!(h.last_reply(), prompts::delivery_failed());
        }

        #[tokio::test]
        async fn unsent_notice_still_reports_delivery_error() {
            let h = filled(SubmissionPolicy::Immediate).await;
            h.gateway.fail_deliveries_to(doctors());
            h.gateway.fail_deliveries_to(user().into());

            let result = h.press(MenuToken::Skip).await;

            assert!(matches!(result, Err(DialogueError::Delivery(_))));
            assert_eq!(h.state().await, IntakeState::Questions);
        }

        #[tokio::test]
        async fn retry_after_failed_delivery_succeeds() {
            let h = filled(SubmissionPolicy::Immediate).await;
            h.gateway.fail_deliveries_to(doctors());
            let _ = h.text("вопрос").await;
            h.gateway.restore_deliveries_to(doctors());

            let state = h.text("вопрос").await.unwrap();

            assert_eq!(state, IntakeState::None);
            assert_eq!(h.gateway.sent_to(doctors()).len(), 1);
        }

        #[tokio::test]
        async fn lost_thank_you_still_completes() {
            let h = filled(SubmissionPolicy::Immediate).await;
            h.gateway.fail_deliveries_to(user().into());

            let state = h.press(MenuToken::Skip).await.unwrap();

            assert_eq!(state, IntakeState::None);
            assert_eq!(h.gateway.sent_to(doctors()).len(), 1);
        }
    }
}
