//! Interactive session controller
//!
//! Owns the value store and the menu loop. Each structure menu opens a fresh
//! `Session` seeded from a copy of the store (or from freshly entered numbers
//! when the store is empty) and terminates it on "Back to Main Menu".

use crate::prompt::{PromptError, PromptResult, Prompter};
use crate::render::{self, Renderer};
use dsc_engine::{
    ArrayCommand, ArrayEngine, Engine, ListCommand, ListEngine, QueueCommand, QueueEngine,
    Session, Structure, ValueStore, OPERATORS,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, info};

/// What a structure menu choice turned into
enum Step<C> {
    Run(C),
    Back,
    Invalid,
}

/// Menu wiring for one engine
///
/// `ITEMS` excludes the trailing "Back to Main Menu" entry, which is always
/// numbered `ITEMS.len() + 1`.
trait Menu: Engine {
    const ITEMS: &'static [&'static str];

    /// Build the command for a 1-based choice, prompting for its arguments
    ///
    /// `len` is the current sequence length; choices that cannot proceed on
    /// an empty or single-element sequence skip their prompts.
    fn command_for<R: BufRead, W: Write>(
        choice: usize,
        len: usize,
        prompter: &mut Prompter<R, W>,
    ) -> PromptResult<Option<Self::Command>>;
}

impl Menu for ArrayEngine {
    const ITEMS: &'static [&'static str] = &[
        "Display Array",
        "Sum of Elements",
        "Average of Elements",
        "Find Minimum Element",
        "Find Maximum Element",
        "Sort Array (Ascending)",
        "Search for an Element",
    ];

    fn command_for<R: BufRead, W: Write>(
        choice: usize,
        _len: usize,
        prompter: &mut Prompter<R, W>,
    ) -> PromptResult<Option<ArrayCommand>> {
        let command = match choice {
            1 => ArrayCommand::Display,
            2 => ArrayCommand::Sum,
            3 => ArrayCommand::Average,
            4 => ArrayCommand::Min,
            5 => ArrayCommand::Max,
            6 => ArrayCommand::Sort,
            7 => ArrayCommand::Search(prompter.read_value("Enter element to search: ")?),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

impl Menu for ListEngine {
    const ITEMS: &'static [&'static str] = &[
        "Display List",
        "Add Element at Start",
        "Add Element at End",
        "Add Element at Specific Position",
        "Remove Element from Start",
        "Remove Element from End",
        "Remove Element at Specific Position",
        "Search for an Element",
    ];

    fn command_for<R: BufRead, W: Write>(
        choice: usize,
        len: usize,
        prompter: &mut Prompter<R, W>,
    ) -> PromptResult<Option<ListCommand>> {
        let command = match choice {
            1 => ListCommand::Display,
            2 => ListCommand::AddFirst(prompter.read_value("Enter element to add at start: ")?),
            3 => ListCommand::AddLast(prompter.read_value("Enter element to add at end: ")?),
            4 => {
                let value = prompter.read_value("Enter element to add: ")?;
                let position = prompter.read_integer("Enter position (0-indexed): ")?;
                ListCommand::AddAt { position, value }
            }
            5 => ListCommand::RemoveFirst,
            6 => ListCommand::RemoveLast,
            // An empty list reports Empty before any position is asked for
            7 if len == 0 => ListCommand::RemoveAt(0),
            7 => ListCommand::RemoveAt(
                prompter.read_integer("Enter position to remove (0-indexed): ")?,
            ),
            8 => ListCommand::Search(prompter.read_value("Enter element to search: ")?),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

impl Menu for QueueEngine {
    const ITEMS: &'static [&'static str] = &[
        "Display Queue",
        "Enqueue (Add Element)",
        "Dequeue (Remove Element from Front)",
        "Peek (View Front Element)",
        "Shrink Queue (Remove multiple from front)",
        "Rotate Queue (Shift elements)",
    ];

    fn command_for<R: BufRead, W: Write>(
        choice: usize,
        len: usize,
        prompter: &mut Prompter<R, W>,
    ) -> PromptResult<Option<QueueCommand>> {
        let command = match choice {
            1 => QueueCommand::Display,
            2 => QueueCommand::Enqueue(prompter.read_value("Enter element to enqueue: ")?),
            3 => QueueCommand::Dequeue,
            4 => QueueCommand::Peek,
            // Empty queue: nothing to shrink, no count needed
            5 if len == 0 => QueueCommand::Shrink(1),
            5 => QueueCommand::Shrink(
                prompter.read_integer("How many elements to remove from the front? ")?,
            ),
            6 if len < 2 => QueueCommand::Rotate(0),
            6 => QueueCommand::Rotate(prompter.read_integer(
                "How many positions to rotate (positive for left/forward, negative for right/backward)? ",
            )?),
            _ => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Drives the interactive menus over any line-based input and output
pub struct SessionController<R, W> {
    prompter: Prompter<R, W>,
    store: ValueStore,
    renderer: Renderer,
}

impl<R: BufRead, W: Write> SessionController<R, W> {
    pub fn new(input: R, output: W, store: ValueStore, renderer: Renderer) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            store,
            renderer,
        }
    }

    /// Values collected so far (including calculator results)
    pub fn store(&self) -> &ValueStore {
        &self.store
    }

    /// Give back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self) -> io::Result<()> {
        match self.main_loop() {
            Ok(()) | Err(PromptError::Closed) => {
                info!("Interactive session finished");
                Ok(())
            }
            Err(PromptError::Io(e)) => Err(e),
        }
    }

    fn main_loop(&mut self) -> PromptResult<()> {
        self.prompter.say("Welcome to the Data Structure Calculator!")?;

        if self.store.is_empty() {
            self.collect_initial_values()?;
        } else {
            self.prompter.say(format!(
                "Initial numbers loaded: {}",
                render::sequence(self.store.values())
            ))?;
        }

        loop {
            self.prompter.say("\n--- Choose an Operation Category ---")?;
            self.prompter.say("1. Array Operations")?;
            self.prompter.say("2. Linked List Operations")?;
            self.prompter.say("3. Queue Operations")?;
            self.prompter.say("4. Basic Two-Number Calculator")?;
            self.prompter.say("5. Exit")?;

            match self.prompter.read_integer("Enter your choice: ")? {
                1 => self.structure_menu::<ArrayEngine>()?,
                2 => self.structure_menu::<ListEngine>()?,
                3 => self.structure_menu::<QueueEngine>()?,
                4 => self.calculator_menu()?,
                5 => {
                    self.prompter.say("Exiting Data Structure Calculator. Goodbye!")?;
                    return Ok(());
                }
                _ => self.prompter.say("Invalid choice. Please try again.")?,
            }
        }
    }

    fn collect_initial_values(&mut self) -> PromptResult<()> {
        let values = self.prompter.read_values(
            "How many numbers do you want to enter for data structure operations? (Enter 0 if none): ",
            "",
        )?;

        if values.is_empty() {
            self.prompter.say(
                "No initial numbers will be collected for data structures. You can still perform direct calculations.",
            )?;
        } else {
            self.prompter.say(format!(
                "Initial numbers collected: {}",
                render::sequence(&values)
            ))?;
        }
        self.store = ValueStore::from_values(values);
        Ok(())
    }

    /// Store copy, or freshly entered numbers when the store is empty
    fn seed_values(&mut self, structure: Structure) -> PromptResult<Vec<f64>> {
        if !self.store.is_empty() {
            return Ok(self.store.snapshot());
        }

        let title = structure.title();
        self.prompter.say(format!(
            "\nNo initial numbers were provided, or you chose to use new numbers for this {}.",
            title
        ))?;
        let values = self.prompter.read_values(
            &format!("How many numbers do you want to use for this {}? ", title),
            &format!(" for {}", title),
        )?;
        if values.is_empty() {
            self.prompter
                .say(format!("No numbers will be used for this {} operation.", title))?;
        }
        Ok(values)
    }

    fn structure_menu<E: Menu>(&mut self) -> PromptResult<()> {
        let structure = E::STRUCTURE;
        let values = self.seed_values(structure)?;
        if values.is_empty() {
            return Ok(());
        }

        let mut session: Session<E> = Session::start(values);
        let title = structure.title();
        self.prompter.say(format!("\n--- {} Operations ---", title))?;
        self.prompter.say(
            self.renderer
                .current(structure, &session.snapshot().unwrap_or_default()),
        )?;

        let back = E::ITEMS.len() + 1;
        while session.is_active() {
            self.prompter.say(format!("\n{} Menu:", title))?;
            for (i, item) in E::ITEMS.iter().enumerate() {
                self.prompter.say(format!("{}. {}", i + 1, item))?;
            }
            self.prompter.say(format!("{}. Back to Main Menu", back))?;

            let choice = self.prompter.read_integer("Enter your choice: ")?;
            let len = session.snapshot().map(|v| v.len()).unwrap_or(0);
            let step = match usize::try_from(choice) {
                Ok(c) if c == back => Step::Back,
                Ok(c) => match E::command_for(c, len, &mut self.prompter)? {
                    Some(command) => Step::Run(command),
                    None => Step::Invalid,
                },
                Err(_) => Step::Invalid,
            };

            match step {
                Step::Run(command) => {
                    let text = match session.execute(command) {
                        Ok(outcome) => self.renderer.outcome(structure, &outcome),
                        Err(e) => self.renderer.error(structure, &e),
                    };
                    self.prompter.say(text)?;
                }
                Step::Back => {
                    session.terminate();
                }
                Step::Invalid => self.prompter.say("Invalid choice. Please try again.")?,
            }
        }
        Ok(())
    }

    fn calculator_menu(&mut self) -> PromptResult<()> {
        self.prompter.say("\n--- Basic Two-Number Calculator ---")?;
        self.prompter
            .say("You can choose numbers from your initial inputs or enter new ones.")?;

        loop {
            self.prompter.say("\nCalculator Menu:")?;
            self.prompter.say("1. Use numbers from initial inputs")?;
            self.prompter.say("2. Enter new numbers")?;
            self.prompter.say("3. Back to Main Menu")?;

            let (lhs, rhs) = match self.prompter.read_integer("Enter your choice: ")? {
                1 => match self.pick_stored_operands()? {
                    Some(pair) => pair,
                    None => continue,
                },
                2 => {
                    let lhs = self.prompter.read_value("Enter first number: ")?;
                    let rhs = self.prompter.read_value("Enter second number: ")?;
                    (lhs, rhs)
                }
                3 => return Ok(()),
                _ => {
                    self.prompter.say("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            self.calculate(lhs, rhs)?;
        }
    }

    fn pick_stored_operands(&mut self) -> PromptResult<Option<(f64, f64)>> {
        if self.store.len() < 2 {
            // pick_pair reports NotEnoughValues before asking for indices
            if let Err(e) = self.store.pick_pair(0, 0) {
                self.prompter.say(self.renderer.plain_error(&e))?;
            }
            return Ok(None);
        }

        self.prompter.say(format!(
            "Initial numbers available: {}",
            render::sequence(self.store.values())
        ))?;
        let first = self
            .prompter
            .read_integer("Enter index of first number (0-indexed): ")?;
        let second = self
            .prompter
            .read_integer("Enter index of second number (0-indexed): ")?;

        match self.store.pick_pair(first, second) {
            Ok(pair) => Ok(Some(pair)),
            Err(e) => {
                self.prompter.say(self.renderer.plain_error(&e))?;
                Ok(None)
            }
        }
    }

    fn calculate(&mut self, lhs: f64, rhs: f64) -> PromptResult<()> {
        self.prompter.say(format!(
            "\nSelected numbers: {} and {}",
            render::value(lhs),
            render::value(rhs)
        ))?;
        self.prompter.say("Choose an operation:")?;
        for (i, op) in OPERATORS.iter().enumerate() {
            self.prompter
                .say(format!("{}. {} ({})", i + 1, op.name(), op.symbol()))?;
        }

        let choice = self.prompter.read_integer("Enter operation choice: ")?;
        let operator = match usize::try_from(choice)
            .ok()
            .and_then(|c| c.checked_sub(1))
            .and_then(|i| OPERATORS.get(i))
        {
            Some(op) => *op,
            None => {
                self.prompter.say("Invalid operation choice.")?;
                return Ok(());
            }
        };

        match operator.apply(lhs, rhs) {
            Ok(calc) => {
                self.prompter.say(self.renderer.calculation(&calc))?;
                let keep = self.prompter.confirm(&format!(
                    "Add result ({}) to initial inputs? (y/n): ",
                    render::value(calc.result)
                ))?;
                if keep {
                    self.store.push(calc.result);
                    self.prompter.say(format!(
                        "Result added to initial inputs: {}",
                        render::sequence(self.store.values())
                    ))?;
                }
            }
            Err(e) => {
                debug!("Calculation rejected: {}", e);
                self.prompter.say(self.renderer.plain_error(&e))?;
            }
        }
        Ok(())
    }
}
