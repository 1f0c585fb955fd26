use bevy::prelude::Vec3;

pub type TargetCallback = Box<dyn FnMut(Vec3) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered list of target-selected listeners.
///
/// Listeners are called synchronously in registration order; each one returns
/// before the next is invoked. Ids are never reused.
#[derive(Default)]
pub struct TargetObservers {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, TargetCallback)>,
}

impl TargetObservers {
    pub fn subscribe(&mut self, callback: impl FnMut(Vec3) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.callbacks.push((id, Box::new(callback)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(existing, _)| *existing != id);
        self.callbacks.len() != before
    }

    pub fn notify(&mut self, position: Vec3) {
        for (_, callback) in self.callbacks.iter_mut() {
            callback(position);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for TargetObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TargetObservers")
            .field("subscribers", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn notifies_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut observers = TargetObservers::default();

        let a = log.clone();
        observers.subscribe(move |pos| {
            a.lock().unwrap().push(("a start", pos));
            a.lock().unwrap().push(("a end", pos));
        });
        let b = log.clone();
        observers.subscribe(move |pos| b.lock().unwrap().push(("b", pos)));

        let pos = Vec3::new(1., 0., 2.);
        observers.notify(pos);

        assert_eq!(
            *log.lock().unwrap(),
            vec![("a start", pos), ("a end", pos), ("b", pos)]
        );
    }

    #[test]
    fn unsubscribe_removes_only_that_listener() {
        let hits = Arc::new(Mutex::new(Vec::new()));
        let mut observers = TargetObservers::default();

        let first = hits.clone();
        let id = observers.subscribe(move |_| first.lock().unwrap().push("first"));
        let second = hits.clone();
        observers.subscribe(move |_| second.lock().unwrap().push("second"));

        assert!(observers.unsubscribe(id));
        assert!(!observers.unsubscribe(id));
        assert_eq!(observers.len(), 1);

        observers.notify(Vec3::ZERO);
        assert_eq!(*hits.lock().unwrap(), vec!["second"]);
    }

    #[test]
    fn ids_are_not_reused() {
        let mut observers = TargetObservers::default();
        let first = observers.subscribe(|_| {});
        observers.unsubscribe(first);
        let second = observers.subscribe(|_| {});

        assert_ne!(first, second);
    }
}
