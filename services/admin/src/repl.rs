//! Line-oriented administrator shell
//!
//! Commands map one-to-one onto the admin view controllers. Box drafts
//! are gathered through a small line wizard and still go through the
//! same draft validation as any other caller.

use std::io::{self, BufRead, Write};

use anyhow::Result;

use common::models::{BoxDraft, ItemDraft, OrderStatus};
use common::session::AdminCredential;
use gateway::StorefrontBackend;

use crate::inventory::InventoryView;
use crate::orders::AdminOrdersView;
use crate::users::UsersView;

const HELP: &str = "\
commands:
  orders [0|1|2|all]         list orders, optionally filtered by status
  counts                     per-status order counts
  set-status <id> <0|1|2>    change an order's status
  del-order <id>             delete an order
  boxes                      list the inventory
  add-box                    create a box (wizard)
  edit-box <id>              replace a box's fields (wizard)
  del-box <id>               delete a box
  users                      list accounts
  find <term>                filter loaded accounts by username
  del-user <username>        delete an account
  help                       this text
  quit                       exit";

/// Run the admin shell until EOF or `quit`
pub async fn run<B>(backend: B, credential: AdminCredential) -> Result<()>
where
    B: StorefrontBackend + Clone,
{
    let mut orders = AdminOrdersView::new(backend.clone(), credential);
    let mut inventory = InventoryView::new(backend.clone(), credential);
    let mut users = UsersView::new(backend, credential);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    println!("blind-box admin console; type `help` for commands");

    loop {
        print!("admin> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else { continue };
        let args: Vec<&str> = parts.collect();

        match (command, args.as_slice()) {
            ("help", _) => println!("{HELP}"),
            ("quit" | "exit", _) => break,

            ("orders", rest) => {
                orders.load().await;
                let filter = match rest.first() {
                    None | Some(&"all") => None,
                    Some(code) => match parse_status(code) {
                        Some(status) => Some(status),
                        None => {
                            println!("usage: orders [0|1|2|all]");
                            continue;
                        }
                    },
                };
                orders.set_filter(filter).await;
                for o in orders.displayed() {
                    println!(
                        "#{} {} bought {} -> {} [{}]",
                        o.id,
                        o.user.username,
                        o.blind_box.name,
                        o.item.name,
                        o.status.label()
                    );
                }
            }
            ("counts", _) => {
                orders.load().await;
                let counts = orders.counts();
                println!(
                    "{} total: {} not shipped, {} awaiting receipt, {} completed",
                    counts.total, counts.not_shipped, counts.awaiting_receipt, counts.completed
                );
            }
            ("set-status", [id, code]) => match (id.parse(), parse_status(code)) {
                (Ok(id), Some(status)) => match orders.update_status(id, status).await {
                    Ok(()) => println!("updated"),
                    Err(err) => println!("{err}"),
                },
                _ => println!("usage: set-status <order-id> <0|1|2>"),
            },
            ("del-order", [id]) => match id.parse() {
                Ok(id) => {
                    let confirmed = confirm(&mut lines, &format!("delete order {id}?"))?;
                    match orders.delete(id, confirmed).await {
                        Ok(true) => println!("deleted"),
                        Ok(false) => println!("kept"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(_) => println!("usage: del-order <order-id>"),
            },

            ("boxes", _) => {
                inventory.load().await;
                for b in inventory.boxes() {
                    println!("#{} {} - {:.2} ({} in stock)", b.id, b.name, b.price, b.stock);
                }
            }
            ("add-box", _) => match read_draft(&mut lines)? {
                Some(draft) => match inventory.create(&draft).await {
                    Ok(()) => println!("created"),
                    Err(err) => println!("{err}"),
                },
                None => println!("aborted"),
            },
            ("edit-box", [id]) => match id.parse() {
                Ok(id) => match read_draft(&mut lines)? {
                    Some(draft) => match inventory.update(id, &draft).await {
                        Ok(()) => println!("updated"),
                        Err(err) => println!("{err}"),
                    },
                    None => println!("aborted"),
                },
                Err(_) => println!("usage: edit-box <box-id>"),
            },
            ("del-box", [id]) => match id.parse() {
                Ok(id) => {
                    let confirmed = confirm(&mut lines, &format!("delete box {id}?"))?;
                    match inventory.delete(id, confirmed).await {
                        Ok(true) => println!("deleted"),
                        Ok(false) => println!("kept"),
                        Err(err) => println!("{err}"),
                    }
                }
                Err(_) => println!("usage: del-box <box-id>"),
            },

            ("users", _) => {
                users.load().await;
                for user in users.users() {
                    println!("#{} {}", user.id, user.username);
                }
            }
            ("find", [term, ..]) => {
                for user in users.search(term) {
                    println!("#{} {}", user.id, user.username);
                }
            }
            ("del-user", [username]) => {
                let confirmed = confirm(&mut lines, &format!("delete user {username}?"))?;
                match users.delete(username, confirmed).await {
                    Ok(true) => println!("deleted"),
                    Ok(false) => println!("kept"),
                    Err(err) => println!("{err}"),
                }
            }

            _ => println!("unknown command; type `help`"),
        }
    }

    Ok(())
}

fn parse_status(code: &str) -> Option<OrderStatus> {
    code.parse::<u8>().ok().and_then(|c| OrderStatus::try_from(c).ok())
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    label: &str,
) -> io::Result<Option<String>> {
    print!("{label}: ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}

/// Gather a box draft line by line; returns `None` on EOF or an
/// unparseable number
fn read_draft(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> io::Result<Option<BoxDraft>> {
    let Some(name) = prompt(lines, "name")? else { return Ok(None) };
    let Some(price) = prompt(lines, "price")? else { return Ok(None) };
    let Ok(price) = price.parse() else { return Ok(None) };
    let Some(image_url) = prompt(lines, "image url")? else { return Ok(None) };
    let Some(stock) = prompt(lines, "stock")? else { return Ok(None) };
    let Ok(stock) = stock.parse() else { return Ok(None) };
    let Some(description) = prompt(lines, "description")? else { return Ok(None) };
    let Some(count) = prompt(lines, "number of item variants")? else { return Ok(None) };
    let Ok(count) = count.parse::<usize>() else { return Ok(None) };

    // Sized by pushes, not up front: count comes from operator input.
    let mut items = Vec::new();
    for index in 1..=count {
        let Some(name) = prompt(lines, &format!("item {index} name"))? else { return Ok(None) };
        let Some(description) = prompt(lines, &format!("item {index} description"))? else {
            return Ok(None);
        };
        let Some(image_url) = prompt(lines, &format!("item {index} image url"))? else {
            return Ok(None);
        };
        let Some(quantity) = prompt(lines, &format!("item {index} quantity"))? else {
            return Ok(None);
        };
        let Ok(quantity) = quantity.parse() else { return Ok(None) };
        items.push(ItemDraft {
            name,
            description,
            image_url,
            quantity,
        });
    }

    Ok(Some(BoxDraft {
        name,
        price,
        image_url,
        stock,
        description,
        items,
    }))
}

fn confirm(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt_text: &str,
) -> io::Result<bool> {
    print!("{prompt_text} [y/N] ");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}
