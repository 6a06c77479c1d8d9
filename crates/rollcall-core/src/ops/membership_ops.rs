use super::store::Store;
use crate::errors::{DirectoryError, Result};
use crate::model::{EventId, GuestId, Membership};

/// Link a guest to an event with a role
///
/// # Arguments
/// * `store` - Mutable reference to the Store
/// * `guest_id` - Existing guest
/// * `event_id` - Existing event
/// * `role` - Free-form role label; empty is accepted
///
/// # Errors
/// * `GuestNotFound` - If the guest doesn't exist (checked first)
/// * `EventNotFound` - If the event doesn't exist
/// * `DuplicateMembership` - If the pair is already linked; the existing
///   role is left untouched
pub fn add_membership(
    store: &mut Store,
    guest_id: GuestId,
    event_id: EventId,
    role: &str,
) -> Result<()> {
    store.require_guest(guest_id)?;
    store.require_event(event_id)?;

    if store.find_membership(guest_id, event_id).is_some() {
        return Err(DirectoryError::DuplicateMembership { guest_id, event_id });
    }

    store
        .memberships
        .push(Membership::new(guest_id, event_id, role));
    tracing::debug!(
        guest_id = guest_id.get(),
        event_id = event_id.get(),
        "membership added"
    );
    Ok(())
}

/// Overwrite the role of an existing membership
///
/// A missing membership is a silent no-op. The membership keeps its position
/// in insertion order.
///
/// # Returns
/// `true` if a membership was updated
pub fn change_membership_role(
    store: &mut Store,
    guest_id: GuestId,
    event_id: EventId,
    new_role: &str,
) -> bool {
    match store.find_membership_mut(guest_id, event_id) {
        Some(membership) => {
            membership.role = new_role.to_string();
            true
        }
        None => {
            tracing::debug!(
                guest_id = guest_id.get(),
                event_id = event_id.get(),
                "no membership to update"
            );
            false
        }
    }
}

/// Delete the membership for a (guest, event) pair
///
/// # Returns
/// `true` if a membership was removed, `false` if none existed
pub fn remove_membership(store: &mut Store, guest_id: GuestId, event_id: EventId) -> bool {
    let before = store.memberships.len();
    store.memberships.retain(|m| !m.links(guest_id, event_id));
    before != store.memberships.len()
}
