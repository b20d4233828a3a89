use divvy_lib::{
    form::{AddFriend, Payer, SplitBill},
    id::IdGenerator,
    Friend, Ledger, Standing,
};
use rusty_money::{iso, Money};

/// Renders the ledger and its forms as plain text
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    currency: &'static iso::Currency,
}

impl Renderer {
    pub fn new(currency: &'static iso::Currency) -> Self {
        Self { currency }
    }

    fn money(self, amount: u64) -> String {
        let amount = i64::try_from(amount).unwrap_or(i64::MAX);
        Money::from_major(amount, self.currency).to_string()
    }

    pub fn standing(self, friend: &Friend) -> String {
        match friend.standing() {
            Standing::OwesYou(amount) => {
                format!("{} owes you {}", friend.name, self.money(amount))
            }
            Standing::YouOwe(amount) => {
                format!("You owe {} {}", friend.name, self.money(amount))
            }
            Standing::Even => format!("You and {} are even", friend.name),
        }
    }

    pub fn friends<G: IdGenerator>(self, ledger: &Ledger<G>) -> String {
        let selected = ledger.selected_friend_id();
        let mut out = String::new();

        for (index, friend) in ledger.friends().iter().enumerate() {
            let marker = if Some(&friend.id) == selected { '>' } else { ' ' };
            out += &format!(
                "{} {}. {:<12} {}\n",
                marker,
                index + 1,
                friend.name,
                self.standing(friend)
            );
        }

        out
    }

    pub fn add_friend_form(self, form: &AddFriend) -> String {
        format!(
            "Add a friend\n  name:  {}\n  image: {}\n",
            form.name(),
            form.image()
        )
    }

    pub fn split_bill_form(self, form: &SplitBill, friend: &Friend) -> String {
        let field = |value: Option<i64>| value.map(|v| v.to_string()).unwrap_or_default();
        let payer = match form.payer() {
            Payer::User => "you",
            Payer::Friend => friend.name.as_str(),
        };

        format!(
            "Split a bill with {name}\n  bill:    {}\n  expense: {}\n  {name}'s share: {}\n  paid by: {}\n",
            field(form.bill()),
            field(form.friend_expense()),
            field(form.friend_share()),
            payer,
            name = friend.name,
        )
    }

    /// The friends list followed by whichever forms are open
    pub fn screen<G: IdGenerator>(
        self,
        ledger: &Ledger<G>,
        add_friend: &AddFriend,
        split_bill: Option<&SplitBill>,
    ) -> String {
        let mut out = self.friends(ledger);

        if ledger.is_add_form_open() {
            out.push('\n');
            out += &self.add_friend_form(add_friend);
        }

        if let (Some(form), Some(friend)) = (split_bill, ledger.selected_friend()) {
            out.push('\n');
            out += &self.split_bill_form(form, friend);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use divvy_lib::id::Sequential;

    use super::*;

    fn renderer() -> Renderer {
        Renderer::new(iso::EUR)
    }

    #[test]
    fn standings() {
        let ledger = Ledger::<Sequential>::default();
        let lines: Vec<String> = ledger
            .friends()
            .iter()
            .map(|friend| renderer().standing(friend))
            .collect();

        assert!(lines[0].starts_with("You owe Clark "));
        assert!(lines[0].contains('7'));
        assert!(lines[1].starts_with("Sarah owes you "));
        assert!(lines[1].contains("20"));
        assert_eq!(lines[2], "You and Anthony are even");
    }

    #[test]
    fn selected_friend_is_marked() {
        let mut ledger = Ledger::<Sequential>::default();
        ledger.select_friend("933372".into());

        let list = renderer().friends(&ledger);
        let lines: Vec<&str> = list.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1. Clark"));
        assert!(lines[1].starts_with("> 2. Sarah"));
    }

    #[test]
    fn overflowing_share_is_blank() {
        let ledger = Ledger::<Sequential>::default();
        let mut split_bill = SplitBill::new("118836".into());
        split_bill.set_bill(Some(10));
        split_bill.set_friend_expense(Some(i64::MIN));

        let form = renderer().split_bill_form(&split_bill, &ledger.friends()[0]);

        assert!(form.contains(&format!("expense: {}", i64::MIN)));
        assert!(form.contains("Clark's share: \n"));
    }

    #[test]
    fn screen_shows_open_forms() {
        let mut ledger = Ledger::<Sequential>::default();
        let add_friend = AddFriend::default();

        let screen = renderer().screen(&ledger, &add_friend, None);
        assert!(!screen.contains("Add a friend"));

        ledger.toggle_add_form();
        let screen = renderer().screen(&ledger, &add_friend, None);
        assert!(screen.contains("Add a friend"));
        assert!(screen.contains("https://i.pravatar.cc/48?"));

        ledger.select_friend("118836".into());
        let mut split_bill = SplitBill::new("118836".into());
        split_bill.set_bill(Some(100));
        split_bill.set_friend_expense(Some(30));
        split_bill.set_payer(Payer::Friend);

        let screen = renderer().screen(&ledger, &add_friend, Some(&split_bill));
        assert!(!screen.contains("Add a friend"));
        assert!(screen.contains("Split a bill with Clark"));
        assert!(screen.contains("Clark's share: 70"));
        assert!(screen.contains("paid by: Clark"));
    }
}
