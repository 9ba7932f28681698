//! Interactive probe for the query-state synchronizer.
//!
//! Drives a synchronizer with an in-process navigator and prints the
//! in-memory state plus the mirrored URL after every command, which makes
//! the exclusivity and page-reset rules easy to poke at by hand.
//!
//! Usage: state-probe [initial-query]
//!   e.g. state-probe "categories=news,events&page=3"

use anyhow::Result;
use std::io::{self, BufRead, Write};
use urlstate::listing::ListingState;
use urlstate::state::{StateEvent, StateSubscriber, ViewEffect};
use urlstate::sync::{Navigator, QueryStateSynchronizer};
use urlstate::SyncConfig;

/// Navigator that records every rewrite instead of touching a browser
struct ProbeNavigator {
    initial: String,
    writes: Vec<String>,
}

impl Navigator for ProbeNavigator {
    fn current_query(&self) -> String {
        self.writes
            .last()
            .cloned()
            .unwrap_or_else(|| self.initial.clone())
    }

    fn replace_query(&mut self, query: &str) {
        self.writes.push(query.to_string());
    }
}

/// Subscriber that surfaces view effects on stdout
struct EffectPrinter;

impl StateSubscriber for EffectPrinter {
    fn on_state_event(&mut self, _event: &StateEvent, _state: &ListingState, effect: ViewEffect) {
        if effect == ViewEffect::ScrollToTop {
            println!("  [view] scroll to top");
        }
    }

    fn name(&self) -> &str {
        "effect-printer"
    }
}

fn print_state(sync: &QueryStateSynchronizer<ProbeNavigator>) {
    let state = sync.state();
    println!(
        "  filter: {:?}  term: {:?}  categories: {:?}",
        state.active_filter(),
        state.search_term(),
        state.selected_categories()
    );
    println!(
        "  page: {}/{}",
        state.current_page(),
        state.pager.total_pages
    );

    let query = sync.navigator().current_query();
    if query.is_empty() {
        println!("  url: /");
    } else {
        println!("  url: /?{}", query);
    }
}

fn print_help() {
    println!("commands:");
    println!("  search <term>   submit the search box (empty term clears it)");
    println!("  toggle <slug>   toggle a category chip");
    println!("  page <n>        request a page");
    println!("  total <n>       report the total page count");
    println!("  back <query>    simulate an external navigation");
    println!("  leave           leave the listing view");
    println!("  show            print current state");
    println!("  history         print the event history");
    println!("  quit");
}

fn main() -> Result<()> {
    urlstate::logging::init_tracing();

    let initial = std::env::args().nth(1).unwrap_or_default();
    let navigator = ProbeNavigator {
        initial,
        writes: Vec::new(),
    };

    // Immediate writes: a debounce would force pumping flush_pending
    // between commands, which only obscures what the probe shows.
    let config = SyncConfig {
        debounce_ms: 0,
        ..Default::default()
    };

    let mut sync = QueryStateSynchronizer::new(navigator, &config);
    sync.subscribe(Box::new(EffectPrinter));

    println!("state probe -- type 'help' for commands");
    print_state(&sync);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let rest = words.collect::<Vec<_>>().join(" ");

        match command {
            "" => continue,
            "search" => sync.submit_search(&rest),
            "toggle" => {
                if rest.is_empty() {
                    println!("usage: toggle <slug>");
                    continue;
                }
                sync.toggle_category(&rest);
            }
            "page" => match rest.parse::<usize>() {
                Ok(page) => sync.go_to_page(page),
                Err(_) => {
                    println!("usage: page <n>");
                    continue;
                }
            },
            "total" => match rest.parse::<usize>() {
                Ok(total) => sync.set_total_pages(total),
                Err(_) => {
                    println!("usage: total <n>");
                    continue;
                }
            },
            "back" => sync.on_external_navigation(&rest),
            "leave" => sync.on_leave_view(),
            "show" => {}
            "history" => {
                for (i, event) in sync.event_history().iter().enumerate() {
                    println!("  [{}] {:?}", i, event);
                }
                continue;
            }
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            other => {
                println!("unknown command: {}", other);
                print_help();
                continue;
            }
        }

        print_state(&sync);
    }

    Ok(())
}
