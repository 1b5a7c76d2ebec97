//! Fluent construction of transition tables.

use super::error::BuildError;
use super::event::EventKind;
use super::state::PageState;
use super::table::{ContextAction, TransitionRule, TransitionTable};
use crate::core::State;

/// Builder for a single rule.
#[derive(Clone, Debug, Default)]
pub struct RuleBuilder {
    from: Option<PageState>,
    on: Option<EventKind>,
    to: Option<PageState>,
    action: ContextAction,
}

impl RuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: PageState) -> Self {
        self.from = Some(state);
        self
    }

    /// Set the triggering event kind (required).
    pub fn on(mut self, event: EventKind) -> Self {
        self.on = Some(event);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: PageState) -> Self {
        self.to = Some(state);
        self
    }

    pub fn action(mut self, action: ContextAction) -> Self {
        self.action = action;
        self
    }

    /// Append the event payload to the context.
    pub fn appends(self) -> Self {
        self.action(ContextAction::Append)
    }

    /// Clear the context.
    pub fn clears(self) -> Self {
        self.action(ContextAction::Clear)
    }

    pub fn build(self) -> Result<TransitionRule, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let on = self.on.ok_or(BuildError::MissingEvent)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        if from.is_final() {
            return Err(BuildError::LeavesTerminal { state: from, event: on });
        }
        if from == PageState::Idle && on == EventKind::Fetch && to == PageState::Idle {
            return Err(BuildError::IdleRestartLoop);
        }

        Ok(TransitionRule {
            from,
            on,
            to,
            action: self.action,
        })
    }
}

/// Builder for a whole table.
///
/// `rule` validates eagerly; `add_rule` defers every error to `build`.
#[derive(Clone, Debug, Default)]
pub struct TransitionTableBuilder {
    rules: Vec<RuleBuilder>,
}

impl TransitionTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rule(mut self, builder: RuleBuilder) -> Result<Self, BuildError> {
        builder.clone().build()?;
        self.rules.push(builder);
        Ok(self)
    }

    pub fn add_rule(mut self, builder: RuleBuilder) -> Self {
        self.rules.push(builder);
        self
    }

    pub fn build(self) -> Result<TransitionTable, BuildError> {
        if self.rules.is_empty() {
            return Err(BuildError::NoRules);
        }

        let mut rules: Vec<TransitionRule> = Vec::with_capacity(self.rules.len());
        for builder in self.rules {
            let rule = builder.build()?;
            if rules.iter().any(|r| r.from == rule.from && r.on == rule.on) {
                return Err(BuildError::DuplicateRule {
                    state: rule.from,
                    event: rule.on,
                });
            }
            rules.push(rule);
        }

        Ok(TransitionTable::from_rules(rules))
    }
}
