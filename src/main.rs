use anyhow::Result;
use tindev::{Api, Screen, Store, session};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let api_url = dotenv::var("API_URL").unwrap_or_else(|_| "http://localhost:3333".to_owned());
    let ws_url = dotenv::var("WS_URL").unwrap_or_else(|_| "ws://localhost:3333".to_owned());
    let db_url =
        dotenv::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:tindev.db?mode=rwc".to_owned());

    let api = Api::new(api_url);
    let store = Store::open(&db_url).await?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let user_id = match session::resolve_existing(&store).await {
            Some(id) => id,
            None => match login_prompt(&api, &store, &mut lines).await? {
                Some(id) => id,
                None => return Ok(()),
            },
        };

        if !run_screen(&api, &ws_url, &store, user_id, &mut lines).await? {
            return Ok(());
        }
        // logged out; back to the login prompt
    }
}

async fn login_prompt(
    api: &Api,
    store: &Store,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<Option<String>> {
    loop {
        println!("GitHub username:");
        let Some(line) = lines.next_line().await? else {
            return Ok(None);
        };
        let username = line.trim();
        if username.is_empty() {
            continue;
        }
        match session::login(api, store, username).await {
            Ok(id) => return Ok(Some(id)),
            Err(err) => println!("login failed: {err}"),
        }
    }
}

/// Runs one screen session. `Ok(true)` means the user logged out and wants
/// the login prompt back, `Ok(false)` means quit.
async fn run_screen(
    api: &Api,
    ws_url: &str,
    store: &Store,
    user_id: String,
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<bool> {
    let mut screen = Screen::mount(api.clone(), ws_url, user_id).await?;
    render(&screen);

    loop {
        tokio::select! {
            dev = screen.next_match() => {
                screen.apply_match(dev);
                render(&screen);
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    screen.close();
                    return Ok(false);
                };
                match line.trim() {
                    "like" | "l" => match screen.like() {
                        Ok(dev) => println!("liked {}", dev.name),
                        Err(_) => println!("no dev to judge"),
                    },
                    "dislike" | "d" => match screen.dislike() {
                        Ok(dev) => println!("passed on {}", dev.name),
                        Err(_) => println!("no dev to judge"),
                    },
                    "close" | "c" => screen.dismiss_match(),
                    "logout" => {
                        screen.close();
                        session::logout(store).await?;
                        return Ok(true);
                    }
                    "quit" | "q" => {
                        screen.close();
                        return Ok(false);
                    }
                    "" => {}
                    _ => println!("commands: like dislike close logout quit"),
                }
                render(&screen);
            }
        }
    }
}

fn render(screen: &Screen) {
    if let Some(dev) = screen.active_match() {
        println!();
        println!("=== IT'S A MATCH ===");
        println!("{}", dev.name);
        println!("{}", dev.bio);
        println!("{}", dev.avatar);
        println!("type `close` to keep swiping");
        return;
    }

    match screen.head() {
        Some(dev) => {
            println!();
            println!("{}  ({} left)", dev.name, screen.remaining());
            println!("{}", dev.bio);
            println!("{}", dev.avatar);
            println!("[like/dislike]");
        }
        None => println!("\nno more devs around :("),
    }
}
