use crate::domain::errors::DomainError;
use crate::domain::order::{self, Order, OrderPayload, WriteKind};
use crate::domain::ports::{Located, Repository};
use crate::domain::reconcile;
use crate::domain::status::{self, StatusGate};

/// Runs the order pipelines over a repository. Each stage returns a
/// `Result`, so `?` is the short-circuit between stages.
pub struct OrderService<R> {
    repo: R,
}

impl<R: Repository<Order>> OrderService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// validate → append
    pub fn create(&self, payload: Option<OrderPayload>) -> Result<Order, DomainError> {
        let payload = payload.unwrap_or_default();
        let order = order::validate(&payload, WriteKind::Create)?;
        self.repo.append(order.clone());
        Ok(order)
    }

    /// lookup
    pub fn read(&self, order_id: &str) -> Result<Order, DomainError> {
        Ok(self.lookup(order_id)?.entity)
    }

    /// lookup → validate → id-match → status gate → merge. The merged order
    /// goes back to the caller but is not written to the collection; the
    /// stored entry is unchanged.
    pub fn update(
        &self,
        order_id: &str,
        payload: Option<OrderPayload>,
    ) -> Result<Order, DomainError> {
        let found = self.lookup(order_id)?;
        let payload = payload.unwrap_or_default();
        let incoming = order::validate(&payload, WriteKind::Update { route_id: order_id })?;
        reconcile::check_route_match("Order", payload.id.as_deref(), Some(order_id))?;
        status::check(
            StatusGate::Update {
                proposed: payload.status.as_deref(),
            },
            &found.entity,
        )?;
        Ok(order::merge(found.entity, incoming))
    }

    /// lookup → status gate → remove at the position captured by lookup.
    pub fn destroy(&self, order_id: &str) -> Result<(), DomainError> {
        let found = self.lookup(order_id)?;
        status::check(StatusGate::Delete, &found.entity)?;
        self.repo.remove_at(found.index);
        Ok(())
    }

    pub fn list(&self) -> Vec<Order> {
        self.repo.all()
    }

    fn lookup(&self, order_id: &str) -> Result<Located<Order>, DomainError> {
        self.repo
            .find_by_id(order_id)
            .ok_or_else(|| DomainError::not_found(format!("Order does not exist: {order_id}.")))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::infrastructure::memory::MemoryRepository;

    fn service() -> OrderService<MemoryRepository<Order>> {
        OrderService::new(MemoryRepository::new())
    }

    fn payload(status: &str) -> OrderPayload {
        OrderPayload {
            id: None,
            deliver_to: Some("12 Main St".to_string()),
            mobile_number: Some("555-0100".to_string()),
            status: Some(status.to_string()),
            dishes: Some(json!([{ "dishId": "d1", "quantity": 1 }])),
        }
    }

    #[test]
    fn create_appends_the_reconciled_order() {
        let service = service();
        let created = service.create(Some(payload("pending"))).unwrap();
        assert_eq!(service.list(), vec![created]);
    }

    #[test]
    fn failed_validation_leaves_the_collection_untouched() {
        let service = service();
        let bad = OrderPayload {
            deliver_to: None,
            ..payload("pending")
        };
        assert!(service.create(Some(bad)).is_err());
        assert!(service.list().is_empty());
    }

    #[test]
    fn read_unknown_id_is_not_found_with_the_id_in_the_message() {
        let err = service().read("nope").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(err.to_string(), "Order does not exist: nope.");
    }

    #[test]
    fn update_responds_with_the_merge_but_does_not_persist_it() {
        let service = service();
        let created = service.create(Some(payload("pending"))).unwrap();

        let mut next = payload("preparing");
        next.deliver_to = Some("99 Elm St".to_string());
        let updated = service.update(&created.id, Some(next)).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.deliver_to, "99 Elm St");
        assert_eq!(updated.status.as_deref(), Some("preparing"));

        // The stored entry still carries the original fields.
        assert_eq!(service.read(&created.id).unwrap(), created);
    }

    #[test]
    fn update_rejects_a_mismatched_payload_id_naming_both() {
        let service = service();
        let created = service.create(Some(payload("pending"))).unwrap();
        let bad = OrderPayload {
            id: Some("xyz".to_string()),
            ..payload("pending")
        };
        let err = service.update(&created.id, Some(bad)).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!(
                "Order id does not match route id. Order: xyz, Route: {}",
                created.id
            )
        );
    }

    #[test]
    fn update_on_a_delivered_order_is_rejected() {
        let service = service();
        let created = service.create(Some(payload("delivered"))).unwrap();
        let err = service
            .update(&created.id, Some(payload("delivered")))
            .unwrap_err();
        assert_eq!(err.to_string(), "A delivery order cannot be changed");
    }

    #[test]
    fn update_checks_the_body_before_the_id_match() {
        let service = service();
        let created = service.create(Some(payload("pending"))).unwrap();
        let bad = OrderPayload {
            id: Some("xyz".to_string()),
            deliver_to: None,
            ..payload("pending")
        };
        let err = service.update(&created.id, Some(bad)).unwrap_err();
        assert_eq!(err.to_string(), "Order must include a deliverTo");
    }

    #[test]
    fn destroy_removes_a_pending_order() {
        let service = service();
        let first = service.create(Some(payload("pending"))).unwrap();
        let second = service.create(Some(payload("pending"))).unwrap();

        service.destroy(&first.id).unwrap();
        assert_eq!(service.list(), vec![second]);
    }

    #[test]
    fn destroy_rejects_non_pending_orders_with_a_validation_error() {
        let service = service();
        let created = service.create(Some(payload("preparing"))).unwrap();
        let err = service.destroy(&created.id).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "An order cannot be deleted unless it is pending"
        );
        assert_eq!(service.list().len(), 1);
    }

    #[test]
    fn destroy_unknown_id_is_not_found() {
        let err = service().destroy("nope").unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
