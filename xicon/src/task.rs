use console::{style, Term};
use std::time::Instant;

/// Prints `[n/m] <descr>` progress lines for a fixed number of tasks.
pub struct TaskRunner {
    term: Term,
    num_tasks: usize,
    current_task: usize,
    now: Instant,
    descr: String,
    verbose: bool,
}

impl TaskRunner {
    pub fn new(num_tasks: usize, verbose: bool) -> Self {
        Self {
            term: Term::stdout(),
            num_tasks,
            current_task: 0,
            now: Instant::now(),
            descr: "".into(),
            verbose,
        }
    }

    fn task_id(&self) -> String {
        style(format!("[{}/{}]", self.current_task + 1, self.num_tasks))
            .force_styling(true)
            .to_string()
    }

    pub fn start_task(&mut self, descr: impl Into<String>) {
        self.now = Instant::now();
        self.descr = descr.into();
        println!("{} {}", self.task_id(), &self.descr);
    }

    pub fn end_task(&mut self) {
        if !self.verbose && self.term.is_term() {
            self.term.clear_last_lines(1).ok();
        }
        let time = self.now.elapsed();
        println!(
            "{} {} [{}ms]",
            self.task_id(),
            &self.descr,
            time.as_millis()
        );
        self.current_task += 1;
    }
}

pub fn print_error(msg: impl std::fmt::Display) {
    eprintln!("{} {}", style("[ERROR]").red(), msg);
}
