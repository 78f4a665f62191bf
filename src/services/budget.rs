//! Budget service
//!
//! Owns the live budget document and applies every change to it. Each applied
//! change replaces the document with a new value, saves it through the
//! document store exactly once and records an audit entry.
//!
//! Input coming from the command line (or any other form) is handled
//! leniently:
//! - an unparseable or negative monthly limit becomes zero;
//! - an expense or fixed cost with an empty description or an unparseable or
//!   negative amount is skipped without touching the document;
//! - removing an unknown id changes nothing.

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::error::{FinanzaError, FinanzaResult};
use crate::models::{BudgetDocument, Expense, ExpenseId, FixedCost, FixedCostId, Money};
use crate::storage::DocumentStore;

use super::aggregate::BudgetSummary;

/// Parse a user-supplied amount, rejecting negative values
pub fn parse_amount(input: &str) -> Option<Money> {
    Money::parse(input).ok().filter(|amount| !amount.is_negative())
}

/// Service holding the current budget document
pub struct BudgetService<S: DocumentStore> {
    store: S,
    document: BudgetDocument,
    audit: Option<AuditLogger>,
}

impl<S: DocumentStore> BudgetService<S> {
    /// Load the document from `store` and take ownership of both
    pub fn open(store: S) -> Self {
        let document = store.load();
        Self {
            store,
            document,
            audit: None,
        }
    }

    /// Record applied changes in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// The current document
    pub fn document(&self) -> &BudgetDocument {
        &self.document
    }

    /// An owned copy of the current document, for work that outlives a borrow
    pub fn snapshot(&self) -> BudgetDocument {
        self.document.clone()
    }

    /// Totals derived from the current document
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_document(&self.document)
    }

    /// The underlying document store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Set the monthly limit from raw input. Anything that is not a
    /// non-negative amount sets the limit to zero.
    pub fn set_monthly_limit(&mut self, input: &str) -> FinanzaResult<&BudgetDocument> {
        let amount = parse_amount(input).unwrap_or_else(|| {
            tracing::debug!(input, "monthly limit not a valid amount, using zero");
            Money::zero()
        });
        self.set_monthly_limit_amount(amount)
    }

    /// Set the monthly limit. Negative or oversized amounts become zero.
    pub fn set_monthly_limit_amount(&mut self, amount: Money) -> FinanzaResult<&BudgetDocument> {
        let amount = if amount.is_negative() || !amount.is_within_limit() {
            Money::zero()
        } else {
            amount
        };

        let before = self.document.monthly_limit;
        let next = BudgetDocument {
            monthly_limit: amount,
            ..self.document.clone()
        };

        let entry = AuditEntry::updated(EntityType::MonthlyLimit, "monthly_limit", &before, &amount);
        self.commit(next, entry)?;
        Ok(&self.document)
    }

    /// Record an expense from raw input. Returns `None` when skipped.
    pub fn add_expense(&mut self, description: &str, amount: &str) -> FinanzaResult<Option<Expense>> {
        match parse_amount(amount) {
            Some(amount) => self.add_expense_amount(description, amount),
            None => {
                tracing::debug!(amount, "expense amount not valid, skipping");
                Ok(None)
            }
        }
    }

    /// Record an expense. New expenses go to the front of the list.
    pub fn add_expense_amount(
        &mut self,
        description: &str,
        amount: Money,
    ) -> FinanzaResult<Option<Expense>> {
        let expense = Expense::new(description.trim(), amount);
        if let Err(reason) = expense.validate() {
            tracing::debug!(%reason, "expense rejected, skipping");
            return Ok(None);
        }

        let mut next = self.document.clone();
        next.expenses.insert(0, expense.clone());

        let entry = AuditEntry::created(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        );
        self.commit(next, entry)?;
        Ok(Some(expense))
    }

    /// Remove an expense. Unknown ids are ignored.
    pub fn remove_expense(&mut self, id: ExpenseId) -> FinanzaResult<Option<Expense>> {
        let Some(position) = self.document.expenses.iter().position(|e| e.id == id) else {
            tracing::debug!(%id, "no such expense, nothing to remove");
            return Ok(None);
        };

        let mut next = self.document.clone();
        let removed = next.expenses.remove(position);

        let entry = AuditEntry::deleted(
            EntityType::Expense,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );
        self.commit(next, entry)?;
        Ok(Some(removed))
    }

    /// Record a fixed cost from raw input. Returns `None` when skipped.
    pub fn add_fixed_cost(
        &mut self,
        description: &str,
        amount: &str,
    ) -> FinanzaResult<Option<FixedCost>> {
        match parse_amount(amount) {
            Some(amount) => self.add_fixed_cost_amount(description, amount),
            None => {
                tracing::debug!(amount, "fixed cost amount not valid, skipping");
                Ok(None)
            }
        }
    }

    /// Record a fixed cost. New fixed costs go to the end of the list.
    pub fn add_fixed_cost_amount(
        &mut self,
        description: &str,
        amount: Money,
    ) -> FinanzaResult<Option<FixedCost>> {
        let cost = FixedCost::new(description.trim(), amount);
        if let Err(reason) = cost.validate() {
            tracing::debug!(%reason, "fixed cost rejected, skipping");
            return Ok(None);
        }

        let mut next = self.document.clone();
        next.fixed_costs.push(cost.clone());

        let entry = AuditEntry::created(
            EntityType::FixedCost,
            cost.id.to_string(),
            Some(cost.description.clone()),
            &cost,
        );
        self.commit(next, entry)?;
        Ok(Some(cost))
    }

    /// Remove a fixed cost. Unknown ids are ignored.
    pub fn remove_fixed_cost(&mut self, id: FixedCostId) -> FinanzaResult<Option<FixedCost>> {
        let Some(position) = self.document.fixed_costs.iter().position(|f| f.id == id) else {
            tracing::debug!(%id, "no such fixed cost, nothing to remove");
            return Ok(None);
        };

        let mut next = self.document.clone();
        let removed = next.fixed_costs.remove(position);

        let entry = AuditEntry::deleted(
            EntityType::FixedCost,
            removed.id.to_string(),
            Some(removed.description.clone()),
            &removed,
        );
        self.commit(next, entry)?;
        Ok(Some(removed))
    }

    /// Resolve a user-supplied identifier (full UUID, short id or UUID
    /// prefix) to an expense
    pub fn find_expense(&self, identifier: &str) -> FinanzaResult<Option<&Expense>> {
        match self.document.matching_expenses(identifier).as_slice() {
            [] => Ok(None),
            [expense] => Ok(Some(*expense)),
            _ => Err(FinanzaError::Validation(format!(
                "'{}' matches more than one expense, use a longer id",
                identifier
            ))),
        }
    }

    /// Resolve a user-supplied identifier to a fixed cost
    pub fn find_fixed_cost(&self, identifier: &str) -> FinanzaResult<Option<&FixedCost>> {
        match self.document.matching_fixed_costs(identifier).as_slice() {
            [] => Ok(None),
            [cost] => Ok(Some(*cost)),
            _ => Err(FinanzaError::Validation(format!(
                "'{}' matches more than one fixed cost, use a longer id",
                identifier
            ))),
        }
    }

    /// Swap in the new document, then persist and audit it.
    ///
    /// The in-memory document is updated even when saving fails; the save
    /// error is returned to the caller.
    fn commit(&mut self, next: BudgetDocument, entry: AuditEntry) -> FinanzaResult<()> {
        self.document = next;

        tracing::info!(
            operation = %entry.operation,
            entity = %entry.entity_type,
            id = %entry.entity_id,
            "budget document changed"
        );

        let saved = self.store.save(&self.document);
        if let Err(err) = &saved {
            tracing::error!(error = %err, "failed to persist budget document, change kept in memory");
        }

        if let Some(audit) = &self.audit {
            if let Err(err) = audit.log(&entry) {
                tracing::warn!(error = %err, "failed to write audit entry");
            }
        }

        saved
    }
}
