//! Line-oriented storefront shell
//!
//! A thin command loop over the view controllers. Every command maps to
//! one controller operation; the loop owns no business rules of its own.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use common::models::{ImageAttachment, OrderStatus};
use common::session::{DEFAULT_AVATARS, SessionContext};
use common::storage::KeyValueStore;
use gateway::StorefrontBackend;

use crate::auth_flow::{self, Navigation};
use crate::bestsellers::BestSellersView;
use crate::catalog::CatalogView;
use crate::community::CommunityView;
use crate::profile::ProfileView;
use crate::purchase::PurchaseOutcome;

const HELP: &str = "\
commands:
  boxes                      list the catalog
  search <term>              filter the loaded catalog by name
  detail <box-id>            show one box with its item variants
  buy <box-id>               buy one box and reveal the item
  best                       show the sales ranking
  buy-best <box-id>          buy straight from the ranking
  feed                       show the community feed
  post <text>                publish a post
  post-image <path> [text]   publish a post with an attached image
  like <post-id>             like a post
  orders                     list your orders
  receive <order-id>         confirm receipt of an order
  del-order <order-id>       delete one of your orders
  posts                      list your posts
  del-post <post-id>         delete one of your posts
  register <user> <pass> [1-4]   create an account (optional avatar pick)
  login <user> <pass>        log in
  logout                     log out
  whoami                     show the session user
  refresh                    re-fetch your account details
  help                       this text
  quit                       exit";

/// Run the storefront shell until EOF or `quit`
pub async fn run<B, S>(backend: B, mut session: SessionContext<S>) -> Result<()>
where
    B: StorefrontBackend + Clone,
    S: KeyValueStore,
{
    let mut catalog = CatalogView::new(backend.clone());
    let mut ranking = BestSellersView::new(backend.clone());
    let mut feed = CommunityView::new(backend.clone());
    let mut profile = ProfileView::new(backend.clone());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("blind-box storefront; type `help` for commands");

    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let args: Vec<&str> = parts.collect();

        match (command, args.as_slice()) {
            ("help", _) => println!("{HELP}"),
            ("quit" | "exit", _) => break,

            ("boxes", _) => {
                catalog.load().await;
                for b in catalog.boxes() {
                    println!("#{} {} - {:.2} ({} in stock)", b.id, b.name, b.price, b.stock);
                }
            }
            ("search", [term, ..]) => {
                for b in catalog.search(term) {
                    println!("#{} {} - {:.2} ({} in stock)", b.id, b.name, b.price, b.stock);
                }
            }
            ("detail", [id]) => match id.parse() {
                Ok(id) => {
                    catalog.open_detail(id).await;
                    if let Some(b) = catalog.detail() {
                        println!("#{} {} - {:.2}", b.id, b.name, b.price);
                        println!("{}", b.description);
                        for item in &b.items {
                            println!("  {} x{}", item.name, item.quantity);
                        }
                    }
                }
                Err(_) => println!("usage: detail <box-id>"),
            },
            ("buy", [id]) => match id.parse() {
                Ok(id) => match catalog.purchase(session.user_id(), id).await {
                    Ok(PurchaseOutcome::Revealed(reveal)) => {
                        println!("you got: {}", reveal.item.name);
                    }
                    Ok(PurchaseOutcome::LoginRequired) => println!("log in first"),
                    Ok(PurchaseOutcome::Busy) => println!("a purchase is already running"),
                    Err(err) => println!("purchase failed: {err}"),
                },
                Err(_) => println!("usage: buy <box-id>"),
            },

            ("best", _) => {
                ranking.load().await;
                for e in ranking.entries() {
                    println!("{}. {} - {} sold", e.rank, e.name, e.sales_count);
                }
            }

            ("buy-best", [id]) => match id.parse() {
                Ok(id) => match ranking.purchase(session.user_id(), id).await {
                    Ok(PurchaseOutcome::Revealed(reveal)) => {
                        println!("you got: {}", reveal.item.name);
                    }
                    Ok(PurchaseOutcome::LoginRequired) => println!("log in first"),
                    Ok(PurchaseOutcome::Busy) => println!("a purchase is already running"),
                    Err(err) => println!("purchase failed: {err}"),
                },
                Err(_) => println!("usage: buy-best <box-id>"),
            },

            ("feed", _) => {
                feed.load().await;
                for p in feed.posts() {
                    let author = p
                        .author
                        .as_ref()
                        .map(|a| a.username.as_str())
                        .unwrap_or("someone");
                    println!("#{} {} ({} likes): {}", p.id, author, p.like_count, p.content);
                }
            }
            ("post", text) if !text.is_empty() => {
                match feed.create(session.user_id(), &text.join(" "), None).await {
                    Ok(()) => println!("posted"),
                    Err(err) => println!("{err}"),
                }
            }
            ("post-image", [path, text @ ..]) => match read_attachment(path) {
                Ok(image) => {
                    match feed
                        .create(session.user_id(), &text.join(" "), Some(image))
                        .await
                    {
                        Ok(()) => println!("posted"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(err) => println!("cannot read {path}: {err}"),
            },
            ("like", [id]) => match (id.parse(), session.user_id()) {
                (Ok(id), Some(user_id)) => match feed.like(user_id, id).await {
                    Ok(()) => println!("liked"),
                    Err(err) => println!("{err}"),
                },
                (Ok(_), None) => println!("log in first"),
                (Err(_), _) => println!("usage: like <post-id>"),
            },

            ("orders", _) => match session.user_id() {
                Some(user_id) => {
                    profile.load_orders(user_id).await;
                    for o in profile.orders() {
                        println!(
                            "#{} {} -> {} [{}]",
                            o.id,
                            o.blind_box.name,
                            o.item.name,
                            o.status.label()
                        );
                    }
                }
                None => println!("log in first"),
            },
            ("receive", [id]) => match id.parse() {
                Ok(id) => match profile.update_order_status(id, OrderStatus::Completed).await {
                    Ok(()) => println!("receipt confirmed"),
                    Err(err) => println!("{err}"),
                },
                Err(_) => println!("usage: receive <order-id>"),
            },
            ("del-order", [id]) => match id.parse() {
                Ok(id) => {
                    let confirmed = confirm(&mut lines, &format!("delete order {id}?"))?;
                    match profile.delete_order(id, confirmed).await {
                        Ok(true) => println!("deleted"),
                        Ok(false) => println!("kept"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(_) => println!("usage: del-order <order-id>"),
            },
            ("posts", _) => match session.user_id() {
                Some(user_id) => {
                    profile.load_posts(user_id).await;
                    for p in profile.posts() {
                        println!("#{} {}", p.id, p.content);
                    }
                }
                None => println!("log in first"),
            },
            ("del-post", [id]) => match id.parse() {
                Ok(id) => {
                    let confirmed = confirm(&mut lines, &format!("delete post {id}?"))?;
                    match profile.delete_post(id, confirmed).await {
                        Ok(true) => println!("deleted"),
                        Ok(false) => println!("kept"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(_) => println!("usage: del-post <post-id>"),
            },

            ("register", [username, password, rest @ ..]) if rest.len() <= 1 => {
                let avatar = rest
                    .first()
                    .and_then(|pick| pick.parse::<usize>().ok())
                    .and_then(|pick| DEFAULT_AVATARS.get(pick.wrapping_sub(1)))
                    .copied()
                    .unwrap_or(DEFAULT_AVATARS[0]);
                match auth_flow::register(&backend, &mut session, username, password, avatar)
                    .await
                {
                    Ok(Navigation::Profile) => println!("welcome, {username}"),
                    Ok(Navigation::Login) => println!("account created; please log in"),
                    Err(err) => println!("{err}"),
                }
            }
            ("login", [username, password]) => {
                match auth_flow::login(&backend, &mut session, username, password).await {
                    Ok(_) => println!("welcome back, {username}"),
                    Err(err) => println!("{err}"),
                }
            }
            ("logout", _) => {
                session.logout()?;
                println!("logged out");
            }
            ("whoami", _) => match session.current_user() {
                Some(user) => println!("{} (id {})", user.username, user.id),
                None => println!("not logged in"),
            },
            ("refresh", _) => match profile.refresh_user(&mut session).await {
                Ok(()) => println!("account details refreshed"),
                Err(err) => println!("{err}"),
            },

            _ => println!("unknown command; type `help`"),
        }
    }

    Ok(())
}

fn read_attachment(path: &str) -> io::Result<ImageAttachment> {
    let bytes = std::fs::read(path)?;
    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    Ok(ImageAttachment { file_name, bytes })
}

fn confirm(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> io::Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
