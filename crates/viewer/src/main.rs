mod render;
mod search;
mod session;

use datafetcher::{COURSES_API_URL, LoadState};
use log::{info, warn};
use reqwest::Client;
use session::{Session, View};
use std::io::{self, BufRead, Write};
use storage::{FileStorage, Storage};

/// Default directory for persisted viewer state, overridable via
/// `VIEWER_DATA_DIR`
const DEFAULT_DATA_DIR: &str = "./data";

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let url = env_or("COURSES_API_URL", COURSES_API_URL);
    let data_dir = env_or("VIEWER_DATA_DIR", DEFAULT_DATA_DIR);

    let state = LoadState::Loading;
    if let Some(banner) = render::load_banner(&state) {
        println!("{banner}");
    }

    let state = datafetcher::load(&Client::new(), &url).await;
    let courses = match state {
        LoadState::Ready(courses) => courses,
        state => {
            // Blocking error state: no retry until the process restarts
            if let Some(banner) = render::load_banner(&state) {
                eprintln!("{banner}");
            }
            std::process::exit(1);
        }
    };

    info!("Persisting viewer state under {data_dir}");
    let mut session = Session::new(courses, FileStorage::new(data_dir));
    run(&mut session);
}

/// Blocking input loop over the two-view session
fn run<S: Storage>(session: &mut Session<S>) {
    let stdin = io::stdin();

    loop {
        match session.view() {
            View::List => println!("{}", render::render_list(session)),
            View::Detail(course) => println!("{}", render::render_detail(course)),
        }
        print_prompt(session.view());

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).unwrap_or(0) == 0 {
            // EOF
            break;
        }

        let input = line.trim();
        if input == "q" {
            break;
        }

        let in_detail = matches!(session.view(), View::Detail(_));
        if in_detail {
            handle_detail_input(session, input);
        } else {
            handle_list_input(session, input);
        }
    }
}

fn print_prompt(view: &View) {
    match view {
        View::List => print!("[number] view course, /text search, / clear, q quit > "),
        View::Detail(_) => print!("[b] back, q quit > "),
    }
    let _ = io::stdout().flush();
}

fn handle_list_input<S: Storage>(session: &mut Session<S>, input: &str) {
    if let Some(query) = input.strip_prefix('/') {
        session.set_query(query);
        return;
    }

    if let Ok(number) = input.parse::<usize>() {
        if number == 0 {
            println!("Courses are numbered from 1.");
            return;
        }
        match session.select(number - 1) {
            Ok(true) => {}
            Ok(false) => println!("No course #{number} in the current list."),
            Err(e) => warn!("Failed to persist viewed set: {e}"),
        }
        return;
    }

    if !input.is_empty() {
        println!("Unrecognized input. Pick a course number, or search with /text.");
    }
}

fn handle_detail_input<S: Storage>(session: &mut Session<S>, input: &str) {
    if input.is_empty() || input == "b" {
        session.back();
    } else {
        println!("Unrecognized input. Go back with b.");
    }
}
