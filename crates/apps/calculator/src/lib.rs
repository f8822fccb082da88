//! Calculator window and the arithmetic engine Spotlight shares with it.

pub mod engine;

use desktop_app_contract::AppMountContext;
use leptos::ev::KeyboardEvent;
use leptos::*;

pub use engine::{evaluate, evaluate_to_display, format_number, is_arithmetic_query, CalcError};

const MAX_TAPE_ITEMS: usize = 24;
const MAX_EXPRESSION_CHARS: usize = 64;

#[derive(Clone, Debug, PartialEq)]
struct TapeEntry {
    id: u64,
    expression: String,
    result_text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum KeyAction {
    Insert(char),
    Backspace,
    Clear,
    Equals,
}

#[derive(Clone, Copy)]
struct KeySpec {
    id: &'static str,
    label: &'static str,
    class_name: &'static str,
    action: KeyAction,
}

const fn key(id: &'static str, label: &'static str, class_name: &'static str, action: KeyAction) -> KeySpec {
    KeySpec {
        id,
        label,
        class_name,
        action,
    }
}

const KEYPAD: [KeySpec; 20] = [
    key("c", "C", "util danger", KeyAction::Clear),
    key("lparen", "(", "util", KeyAction::Insert('(')),
    key("rparen", ")", "util", KeyAction::Insert(')')),
    key("divide", "÷", "operator", KeyAction::Insert('/')),
    key("7", "7", "digit", KeyAction::Insert('7')),
    key("8", "8", "digit", KeyAction::Insert('8')),
    key("9", "9", "digit", KeyAction::Insert('9')),
    key("mul", "×", "operator", KeyAction::Insert('*')),
    key("4", "4", "digit", KeyAction::Insert('4')),
    key("5", "5", "digit", KeyAction::Insert('5')),
    key("6", "6", "digit", KeyAction::Insert('6')),
    key("sub", "−", "operator", KeyAction::Insert('-')),
    key("1", "1", "digit", KeyAction::Insert('1')),
    key("2", "2", "digit", KeyAction::Insert('2')),
    key("3", "3", "digit", KeyAction::Insert('3')),
    key("add", "+", "operator", KeyAction::Insert('+')),
    key("0", "0", "digit wide", KeyAction::Insert('0')),
    key("dot", ".", "digit", KeyAction::Insert('.')),
    key("back", "⌫", "util", KeyAction::Backspace),
    key("eq", "=", "operator equals", KeyAction::Equals),
];

#[derive(Clone, Debug, Default, PartialEq)]
struct KeypadState {
    expression: String,
    result: Option<String>,
    tape: Vec<TapeEntry>,
    next_tape_id: u64,
}

impl KeypadState {
    fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Insert(ch) => self.insert(ch),
            KeyAction::Backspace => {
                self.result = None;
                self.expression.pop();
            }
            KeyAction::Clear => {
                self.expression.clear();
                self.result = None;
            }
            KeyAction::Equals => self.equals(),
        }
    }

    fn insert(&mut self, ch: char) {
        if let Some(result) = self.result.take() {
            // A digit after a result starts fresh; an operator continues from it.
            let continues = matches!(ch, '+' | '-' | '*' | '/') && evaluate(&result).is_ok();
            self.expression = if continues { result } else { String::new() };
        }
        if self.expression.chars().count() < MAX_EXPRESSION_CHARS {
            self.expression.push(ch);
        }
    }

    fn equals(&mut self) {
        if self.expression.trim().is_empty() {
            return;
        }
        let result_text = evaluate_to_display(&self.expression);
        self.next_tape_id += 1;
        self.tape.push(TapeEntry {
            id: self.next_tape_id,
            expression: self.expression.clone(),
            result_text: result_text.clone(),
        });
        if self.tape.len() > MAX_TAPE_ITEMS {
            let overflow = self.tape.len() - MAX_TAPE_ITEMS;
            self.tape.drain(0..overflow);
        }
        self.result = Some(result_text);
    }

    fn display_text(&self) -> String {
        match &self.result {
            Some(result) => result.clone(),
            None if self.expression.is_empty() => "0".to_string(),
            None => self.expression.clone(),
        }
    }

    fn expression_text(&self) -> String {
        match &self.result {
            Some(_) => format!("{} =", self.expression),
            None => String::new(),
        }
    }

    fn reuse(&mut self, result_text: &str) {
        if evaluate(result_text).is_ok() {
            self.expression = result_text.to_string();
            self.result = None;
        }
    }
}

fn keyboard_action(key: &str) -> Option<KeyAction> {
    match key {
        "=" | "Enter" => Some(KeyAction::Equals),
        "Backspace" => Some(KeyAction::Backspace),
        "Escape" | "Delete" => Some(KeyAction::Clear),
        "x" | "X" => Some(KeyAction::Insert('*')),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) if ch.is_ascii_digit() || "+-*/().".contains(ch) => {
                    Some(KeyAction::Insert(ch))
                }
                _ => None,
            }
        }
    }
}

/// Mounts the calculator window.
pub fn mount(context: AppMountContext) -> View {
    view! { <CalculatorApp context=context /> }.into_view()
}

#[component]
/// Keypad calculator backed by the restricted arithmetic engine.
pub fn CalculatorApp(context: AppMountContext) -> impl IntoView {
    let services = context.services;
    let calc = create_rw_signal(KeypadState::default());

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        if let Some(action) = keyboard_action(&ev.key()) {
            ev.prevent_default();
            calc.update(|state| state.apply(action));
        }
    };

    view! {
        <div
            class="app-calculator-shell"
            class:dark=move || services.is_dark()
            tabindex="0"
            on:keydown=on_keydown
        >
            <section class="calculator-main" aria-label="Calculator keypad">
                <div class="calc-display-panel">
                    <div class="calc-expression" aria-live="off">
                        {move || calc.get().expression_text()}
                    </div>
                    <div class="calc-display" role="status" aria-live="polite">
                        {move || calc.get().display_text()}
                    </div>
                </div>

                <div class="calc-keypad" role="group" aria-label="Calculator keys">
                    <For each=move || KEYPAD.to_vec() key=|spec| spec.id let:spec>
                        <button
                            type="button"
                            class=format!("calc-key {}", spec.class_name)
                            on:click=move |_| calc.update(|state| state.apply(spec.action))
                        >
                            {spec.label}
                        </button>
                    </For>
                </div>
            </section>

            <aside class="calc-tape" aria-label="Recent calculations">
                <div class="calc-tape-header">
                    <strong>"Tape"</strong>
                    <button type="button" on:click=move |_| calc.update(|state| state.tape.clear())>
                        "Clear"
                    </button>
                </div>
                <Show
                    when=move || !calc.get().tape.is_empty()
                    fallback=|| view! { <p class="calc-empty-tape">"No calculations yet"</p> }
                >
                    <For
                        each=move || { calc.get().tape.into_iter().rev().collect::<Vec<_>>() }
                        key=|item| item.id
                        let:item
                    >
                        <button
                            type="button"
                            class="calc-tape-item"
                            on:click={
                                let result_text = item.result_text.clone();
                                move |_| calc.update(|state| state.reuse(&result_text))
                            }
                        >
                            <span class="calc-tape-expr">{item.expression.clone()}</span>
                            <span class="calc-tape-result">{format!("= {}", item.result_text)}</span>
                        </button>
                    </For>
                </Show>
            </aside>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn press_all(state: &mut KeypadState, keys: &str) {
        for key in keys.chars() {
            let action = match key {
                '=' => KeyAction::Equals,
                'C' => KeyAction::Clear,
                '<' => KeyAction::Backspace,
                other => KeyAction::Insert(other),
            };
            state.apply(action);
        }
    }

    #[test]
    fn keypad_evaluates_expression_and_records_tape() {
        let mut state = KeypadState::default();
        assert_eq!(state.display_text(), "0");

        press_all(&mut state, "12+5=");
        assert_eq!(state.display_text(), "17");
        assert_eq!(state.expression_text(), "12+5 =");
        assert_eq!(state.tape.len(), 1);
        assert_eq!(state.tape[0].result_text, "17");
    }

    #[test]
    fn operator_after_result_continues_and_digit_starts_fresh() {
        let mut state = KeypadState::default();
        press_all(&mut state, "5/2=*2=");
        assert_eq!(state.display_text(), "5");

        press_all(&mut state, "7");
        assert_eq!(state.display_text(), "7");
    }

    #[test]
    fn invalid_input_shows_invalid_calculation() {
        let mut state = KeypadState::default();
        press_all(&mut state, "4/0=");
        assert_eq!(state.display_text(), "Invalid calculation");

        press_all(&mut state, "+");
        assert_eq!(state.display_text(), "+");
    }

    #[test]
    fn backspace_and_clear_edit_the_expression() {
        let mut state = KeypadState::default();
        press_all(&mut state, "123<");
        assert_eq!(state.display_text(), "12");
        press_all(&mut state, "C");
        assert_eq!(state.display_text(), "0");
    }

    #[test]
    fn tape_is_bounded_and_reusable() {
        let mut state = KeypadState::default();
        for _ in 0..30 {
            press_all(&mut state, "1+1=");
        }
        assert_eq!(state.tape.len(), MAX_TAPE_ITEMS);

        state.reuse("2");
        assert_eq!(state.display_text(), "2");
        state.reuse("Invalid calculation");
        assert_eq!(state.display_text(), "2");
    }

    #[test]
    fn keyboard_mapping() {
        assert_eq!(keyboard_action("Enter"), Some(KeyAction::Equals));
        assert_eq!(keyboard_action("x"), Some(KeyAction::Insert('*')));
        assert_eq!(keyboard_action("("), Some(KeyAction::Insert('(')));
        assert_eq!(keyboard_action("a"), None);
        assert_eq!(keyboard_action("F9"), None);
    }
}
