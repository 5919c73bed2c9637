use crate::color::Color;

/// Requests a host can send to a grid.
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    /// New width in cells.
    SetWidth(u32),
    /// New height in cells.
    SetHeight(u32),
    SetCurrentColor(Color),
    /// Physical offset inside the surface.
    PointerClick { x: f64, y: f64 },
    ClearRequest,
}

/// What a grid tells its listeners after handling a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Surface is ready; physical pixels.
    DimensionsInitialized { width: u32, height: u32 },
    /// One cell was colored; logical cell units.
    PixelAdded { col: u32, row: u32, color: Color },
    Cleared,
}

pub type Listener = Box<dyn FnMut(&Notification)>;

/// Registered listeners, called in registration order.
#[derive(Default)]
pub struct Listeners {
    listeners: Vec<Listener>,
}

impl Listeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Notification) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&mut self, notification: Notification) {
        for listener in self.listeners.iter_mut() {
            listener(&notification);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listeners").field("count", &self.listeners.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emits_to_every_listener_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::new();

        let first = Rc::clone(&seen);
        listeners.subscribe(move |n| first.borrow_mut().push((1, n.clone())));
        let second = Rc::clone(&seen);
        listeners.subscribe(move |n| second.borrow_mut().push((2, n.clone())));

        listeners.emit(Notification::Cleared);

        assert_eq!(listeners.len(), 2);
        assert_eq!(
            *seen.borrow(),
            vec![(1, Notification::Cleared), (2, Notification::Cleared)]
        );
    }
}
