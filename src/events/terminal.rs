use crate::state::{DisplayMode, Focus, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => warn!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => warn!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => Ok(true),
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    let KeyEvent {
        code, modifiers, ..
    } = key;

    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('c') => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return false;
            }
            KeyCode::Char('f') => {
                state.close_detail().toggle_display_mode();
            }
            KeyCode::Char('t') => {
                state.toggle_dark_mode();
            }
            KeyCode::Char('r') => {
                state.reset();
            }
            _ => (),
        }
        return true;
    }

    if state.is_detail_open() {
        match code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                state.close_detail();
            }
            KeyCode::Char('i') => {
                state.toggle_instructions();
            }
            KeyCode::Char('f') => {
                state.toggle_detail_favorite();
            }
            _ => (),
        }
        return true;
    }

    match code {
        KeyCode::Tab if state.display_mode() == DisplayMode::Home => {
            state.next_focus();
        }
        KeyCode::BackTab if state.display_mode() == DisplayMode::Home => {
            state.previous_focus();
        }
        KeyCode::Enter => match state.current_focus() {
            Focus::Query => {
                state.submit_search();
            }
            Focus::Ingredients => {
                state.submit_suggestion();
            }
            _ => {
                state.open_selected();
            }
        },
        KeyCode::Left if state.current_focus() == Focus::Ingredients => {
            state.previous_category();
        }
        KeyCode::Right if state.current_focus() == Focus::Ingredients => {
            state.next_category();
        }
        KeyCode::Backspace if state.current_focus().is_input() => {
            state.remove_input_char();
        }
        KeyCode::Char(c) if state.current_focus().is_input() => {
            state.add_input_char(c);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_item();
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_item();
        }
        KeyCode::Char('f') => {
            state.toggle_selected_favorite();
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            debug!("Received exit key '{:?}'.", code);
            return false;
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::network::Event as NetworkEvent;
    use crate::favorites::Favorites;
    use crate::logger::LogBuffer;
    use crate::mealdb::Meal;
    use crate::preferences::Preferences;
    use fake::{Fake, Faker};
    use std::sync::mpsc::channel;

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut State, c: char) -> bool {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn typing_and_enter_submits_search() {
        let (tx, rx) = channel();
        let mut state = State::new(
            tx,
            Favorites::default(),
            Preferences::default(),
            LogBuffer::default(),
        );
        for c in "pie".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        press(&mut state, KeyCode::Enter);
        assert_eq!(
            rx.try_recv().unwrap(),
            NetworkEvent::SearchMeals {
                query: "pie".to_string(),
                sequence: 1
            }
        );
    }

    #[test]
    fn ingredient_focus_cycles_category() {
        let mut state = State::default();
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.current_focus(), Focus::Ingredients);
        press(&mut state, KeyCode::Right);
        assert_eq!(state.category(), Some("Breakfast"));
        press(&mut state, KeyCode::Left);
        assert_eq!(state.category(), None);
    }

    #[test]
    fn letters_in_input_are_not_shortcuts() {
        let mut state = State::default();
        assert!(press(&mut state, KeyCode::Char('q')));
        press(&mut state, KeyCode::Char('f'));
        assert_eq!(state.query(), "qf");
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn detail_keys() {
        let (tx, rx) = channel();
        let mut state = State::new(
            tx,
            Favorites::default(),
            Preferences::default(),
            LogBuffer::default(),
        );
        let meal: Meal = Faker.fake();
        state.open_meal(&meal.id);
        rx.try_recv().unwrap();
        state.apply_meal_detail(1, Ok(Some(meal.clone())));

        press(&mut state, KeyCode::Char('i'));
        assert!(state.detail().unwrap().show_instructions());
        press(&mut state, KeyCode::Char('f'));
        assert!(state.is_favorite(&meal.id));
        assert!(press(&mut state, KeyCode::Esc));
        assert!(!state.is_detail_open());
    }

    #[test]
    fn control_shortcuts() {
        let mut state = State::default();
        ctrl(&mut state, 'f');
        assert_eq!(state.display_mode(), DisplayMode::Favorites);
        ctrl(&mut state, 't');
        assert!(state.is_dark_mode());
        ctrl(&mut state, 'r');
        assert!(state.is_dark_mode());
        assert!(!ctrl(&mut state, 'c'));
    }

    #[test]
    fn escape_outside_detail_exits() {
        let mut state = State::default();
        assert!(!press(&mut state, KeyCode::Esc));
    }
}
