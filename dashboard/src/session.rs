//! One terminal session: a mounted list view plus the drawers and cards the
//! user acts through.

use anyhow::{anyhow, Context};
use customer_core::{
    notification_bus, CustomerClient, CustomerForm, CustomerId, ListView, ListViewController,
    MutationDrawer, Notification, NotificationBus, NotificationFeed, SequencePolicy,
};

use crate::transport::Transport;

/// Field overrides applied to an update drawer's pre-filled form.
#[derive(Debug, Clone, Default)]
pub struct FormEdits {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
}

impl FormEdits {
    fn apply(self, form: &mut CustomerForm) {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(email) = self.email {
            form.email = email;
        }
        if let Some(age) = self.age {
            form.age = Some(age);
        }
    }
}

pub struct Session<T> {
    client: CustomerClient,
    transport: T,
    list: ListViewController<NotificationBus>,
    bus: NotificationBus,
    feed: NotificationFeed,
}

impl<T: Transport> Session<T> {
    pub fn new(client: CustomerClient, policy: SequencePolicy, transport: T) -> Self {
        let (bus, feed) = notification_bus();
        let list = ListViewController::new(client.clone(), bus.clone()).with_policy(policy);
        Self {
            client,
            transport,
            list,
            bus,
            feed,
        }
    }

    /// Display the list for the first time.
    pub fn mount(&mut self) {
        if let Some(pending) = self.list.mount() {
            let outcome = self.transport.execute(pending.request.clone());
            self.list.settle(pending, outcome);
        }
    }

    pub fn view(&self) -> ListView {
        self.list.view()
    }

    /// Notifications published since the last call.
    pub fn notifications(&self) -> Vec<Notification> {
        self.feed.drain()
    }

    pub fn create(&mut self, form: CustomerForm) -> anyhow::Result<()> {
        let view = self.list.view();
        let entry = view
            .create_entry()
            .ok_or_else(|| anyhow!("customer list is still loading"))?;
        let mut drawer = entry.open_drawer();
        *drawer.form_mut() = form;
        self.submit(drawer).context("create failed")
    }

    pub fn update(&mut self, id: CustomerId, edits: FormEdits) -> anyhow::Result<()> {
        let mut drawer = self
            .list
            .view()
            .card(id)
            .ok_or_else(|| anyhow!("customer {id} is not in the list"))?
            .update_drawer();
        drawer.open();
        edits.apply(drawer.form_mut());
        self.submit(drawer).context("update failed")
    }

    pub fn delete(&mut self, id: CustomerId) -> anyhow::Result<()> {
        let view = self.list.view();
        let card = view
            .card(id)
            .ok_or_else(|| anyhow!("customer {id} is not in the list"))?;
        let pending = card.delete(&self.client);
        let outcome = self.transport.execute(pending.request.clone());
        card.settle_delete(&self.client, pending, outcome, &self.bus)
            .context("delete failed")?;
        self.run_refreshes();
        Ok(())
    }

    fn submit(&mut self, mut drawer: MutationDrawer) -> anyhow::Result<()> {
        let pending = drawer.submit(&self.client)?;
        let outcome = self.transport.execute(pending.request.clone());
        drawer.settle(&self.client, pending, outcome, &self.bus)?;
        self.run_refreshes();
        Ok(())
    }

    fn run_refreshes(&mut self) {
        for pending in self.list.pending_refreshes() {
            let outcome = self.transport.execute(pending.request.clone());
            self.list.settle(pending, outcome);
        }
    }
}
