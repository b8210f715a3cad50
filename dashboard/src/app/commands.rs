//! Shell command grammar.
//!
//! ```text
//! login <username> <password>
//! trade <give_amount> <give_currency> <want_amount> <want_currency> [give_issuer=r..] [want_issuer=r..]
//! cancel | offers | view <offer_sequence> | history | trust
//! enable <currency> [issuer] [limit]
//! send <amount> <currency> <destination> [issuer]
//! go <screen> | refresh | logout | help | quit
//! ```

use crate::app::controller::TradeForm;
use crate::app::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { username: String, password: String },
    Logout,
    Trade(TradeForm),
    Cancel,
    View(u64),
    Enable {
        currency: String,
        issuer: Option<String>,
        limit: Option<String>,
    },
    Send {
        amount: String,
        currency: String,
        destination: String,
        issuer: Option<String>,
    },
    Go(Screen),
    Refresh,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  login <username> <password>       log in
  trade <amt> <cur> <amt> <cur>     offer to give the first amount for the second
        [give_issuer=..] [want_issuer=..]
  cancel                            cancel the active trade
  offers                            list open offers
  view <offer_sequence>             show one open offer
  history                           show ledger history
  trust                             show trust lines
  enable <currency> [issuer] [lim]  open a trust line
  send <amt> <cur> <dest> [issuer]  pay an address directly
  go <screen>                       switch screen (dashboard, trade, offers, history, trust)
  refresh                           reload wallet data
  logout                            end the session
  quit                              exit";

impl Command {
    /// Parse one input line. `Ok(None)` for a blank line; `Err` carries usage text.
    pub fn parse(line: &str) -> Result<Option<Command>, String> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("login", [username, password]) => Command::Login {
                username: username.to_string(),
                password: password.to_string(),
            },
            ("login", _) => return Err("usage: login <username> <password>".to_string()),
            ("logout", []) => Command::Logout,
            ("trade" | "swap", [give_amount, give_currency, want_amount, want_currency, rest @ ..]) => {
                let mut form = TradeForm::new(*give_amount, *give_currency, *want_amount, *want_currency);
                for option in rest {
                    match option.split_once('=') {
                        Some(("give_issuer", issuer)) => form.give_issuer = Some(issuer.to_string()),
                        Some(("want_issuer", issuer)) => form.want_issuer = Some(issuer.to_string()),
                        _ => return Err(format!("unknown trade option '{}'", option)),
                    }
                }
                Command::Trade(form)
            }
            ("trade" | "swap", _) => {
                return Err("usage: trade <give_amount> <give_currency> <want_amount> <want_currency>".to_string())
            }
            ("cancel", []) => Command::Cancel,
            ("offers", []) => Command::Go(Screen::OpenOffers),
            ("history", []) => Command::Go(Screen::History),
            ("trust", []) => Command::Go(Screen::TrustLines),
            ("dashboard" | "home", []) => Command::Go(Screen::Dashboard),
            ("view", [sequence]) => Command::View(
                sequence
                    .trim_start_matches('#')
                    .parse()
                    .map_err(|_| format!("'{}' is not an offer sequence", sequence))?,
            ),
            ("view", _) => return Err("usage: view <offer_sequence>".to_string()),
            ("enable", [currency, rest @ ..]) if rest.len() <= 2 => Command::Enable {
                currency: currency.to_string(),
                issuer: rest.first().map(|s| s.to_string()),
                limit: rest.get(1).map(|s| s.to_string()),
            },
            ("enable", _) => return Err("usage: enable <currency> [issuer] [limit]".to_string()),
            ("send" | "pay", [amount, currency, destination, rest @ ..]) if rest.len() <= 1 => Command::Send {
                amount: amount.to_string(),
                currency: currency.to_string(),
                destination: destination.to_string(),
                issuer: rest.first().map(|s| s.to_string()),
            },
            ("send" | "pay", _) => return Err("usage: send <amount> <currency> <destination> [issuer]".to_string()),
            ("go", [screen]) => Command::Go(
                Screen::from_name(screen).ok_or_else(|| format!("unknown screen '{}'", screen))?,
            ),
            ("go", _) => return Err("usage: go <screen>".to_string()),
            ("refresh", []) => Command::Refresh,
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (other, _) => return Err(format!("unknown command '{}' (try 'help')", other)),
        };

        Ok(Some(command))
    }
}
