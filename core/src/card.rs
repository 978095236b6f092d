use std::fmt;

use crate::client::CustomerClient;
use crate::drawer::MutationDrawer;
use crate::error::ApiError;
use crate::form::CustomerForm;
use crate::http::HttpResponse;
use crate::mutation::{self, MutationKind, PendingMutation};
use crate::notify::Notifier;
use crate::refresh::RefreshHandle;
use crate::types::{Customer, CustomerId, Gender};

/// Presentation of one customer, with the triggers its row exposes.
#[derive(Debug, Clone)]
pub struct CardView {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub age: u32,
    pub gender: Gender,
    pub image_index: u64,
    pub portrait_url: String,
    initial: CustomerForm,
    refresh: RefreshHandle,
}

impl CardView {
    pub fn new(customer: &Customer, refresh: RefreshHandle) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            age: customer.age,
            gender: customer.gender,
            image_index: customer.image_index(),
            portrait_url: customer.portrait_url(),
            initial: CustomerForm::from(customer),
            refresh,
        }
    }

    /// A closed update drawer scoped to this card's record.
    pub fn update_drawer(&self) -> MutationDrawer {
        MutationDrawer::update(self.id, self.initial.clone(), self.refresh.clone())
    }

    pub fn delete(&self, client: &CustomerClient) -> PendingMutation {
        PendingMutation {
            kind: MutationKind::Delete(self.id),
            subject: self.name.clone(),
            request: client.build_delete_customer(self.id),
        }
    }

    pub fn settle_delete<N: Notifier>(
        &self,
        client: &CustomerClient,
        pending: PendingMutation,
        outcome: Result<HttpResponse, ApiError>,
        notifier: &N,
    ) -> Result<(), ApiError> {
        mutation::settle(client, pending, outcome, notifier, &self.refresh)
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#{} {} <{}>", self.id, self.name, self.email)?;
        writeln!(f, "   Age {} | {}", self.age, self.gender)?;
        writeln!(f, "   {}", self.portrait_url)?;
        write!(f, "   [Update] [Delete]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::notify::notification_bus;
    use crate::refresh::{refresh_channel, RefreshReason};

    fn jamila() -> Customer {
        Customer {
            id: 2,
            name: "Jamila".to_string(),
            email: "jamila@gmail.com".to_string(),
            age: 19,
            gender: Gender::Female,
        }
    }

    #[test]
    fn card_carries_derived_portrait() {
        let (refresh, _queue) = refresh_channel();
        let card = CardView::new(&jamila(), refresh);
        assert_eq!(card.image_index, 2);
        assert_eq!(card.portrait_url, "https://randomuser.me/api/portraits/women/2.jpg");
        assert_eq!(
            card.to_string(),
            "#2 Jamila <jamila@gmail.com>\n   Age 19 | FEMALE\n   https://randomuser.me/api/portraits/women/2.jpg\n   [Update] [Delete]"
        );
    }

    #[test]
    fn update_drawer_is_scoped_and_closed() {
        let (refresh, _queue) = refresh_channel();
        let card = CardView::new(&jamila(), refresh);
        let drawer = card.update_drawer();
        assert!(!drawer.is_open());
        assert_eq!(drawer.form(), &CustomerForm::from(&jamila()));
        assert_eq!(drawer.kind(), crate::drawer::DrawerKind::Update(2));
    }

    #[test]
    fn delete_refreshes_on_success_only() {
        let client = CustomerClient::new("http://localhost:8080");
        let (refresh, queue) = refresh_channel();
        let (bus, feed) = notification_bus();
        let card = CardView::new(&jamila(), refresh);

        let pending = card.delete(&client);
        assert_eq!(pending.request.method, HttpMethod::Delete);
        card.settle_delete(&client, pending, Ok(HttpResponse::new(204, "")), &bus)
            .unwrap();
        assert_eq!(queue.drain(), vec![RefreshReason::Deleted(2)]);
        assert_eq!(feed.drain()[0].title, "Customer deleted");

        let pending = card.delete(&client);
        let err = card
            .settle_delete(&client, pending, Ok(HttpResponse::new(404, "")), &bus)
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(queue.drain().is_empty());
        assert_eq!(feed.drain()[0].title, "404");
    }
}
