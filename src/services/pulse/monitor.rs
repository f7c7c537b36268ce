use libpulse_binding::{
    callbacks::ListResult,
    context::{
        self, Context, FlagSet as ContextFlags,
        subscribe::{Facility, InterestMaskSet, Operation},
    },
};
use libpulse_tokio::TokioMain;
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::config::PulseConfig;

use super::{
    PulseError,
    conversion::{device_report_from_sink, device_report_from_source, server_report},
    events::{DeviceKind, MonitorEvent, Notification, device_to_query},
};

type NotificationSender = mpsc::UnboundedSender<Notification>;
type NotificationReceiver = mpsc::UnboundedReceiver<Notification>;

/// Connection to the audio server with an active sink/source subscription.
///
/// The mainloop only makes progress while [`PulseMonitor::next_event`] is
/// being awaited; callbacks fire from inside that call.
pub struct PulseMonitor {
    mainloop: TokioMain,
    context: Context,
    notifications_tx: NotificationSender,
    notifications_rx: NotificationReceiver,
}

impl PulseMonitor {
    /// Connects to the audio server and subscribes to mixer changes.
    ///
    /// # Errors
    /// Returns error if the context cannot be created, the connection is
    /// refused, or the context fails before becoming ready.
    #[instrument(skip(config), fields(client = %config.client_name))]
    pub async fn connect(config: &PulseConfig) -> Result<Self, PulseError> {
        let mut mainloop = TokioMain::new();
        let mut context = Context::new(&mainloop, &config.client_name).ok_or_else(|| {
            PulseError::ConnectionFailed("Failed to create context".to_string())
        })?;

        let flags = if config.autospawn {
            ContextFlags::NOFLAGS
        } else {
            ContextFlags::NOAUTOSPAWN
        };

        context
            .connect(config.server.as_deref(), flags, None)
            .map_err(|e| PulseError::ConnectionFailed(format!("{e}")))?;

        match mainloop.wait_for_ready(&context).await {
            Ok(context::State::Ready) => {}
            Ok(_) => {
                return Err(PulseError::ConnectionFailed(format!("{}", context.errno())));
            }
            Err(retval) => {
                return Err(PulseError::ConnectionFailed(format!(
                    "mainloop quit with status {}",
                    retval.0
                )));
            }
        }

        info!("PulseAudio connection established");

        let (notifications_tx, notifications_rx) = mpsc::unbounded_channel();
        let mut monitor = Self {
            mainloop,
            context,
            notifications_tx,
            notifications_rx,
        };
        monitor.setup_subscription();

        Ok(monitor)
    }

    /// Drives the mainloop until the next reportable event.
    ///
    /// Cancel-safe: notifications are handled synchronously once received.
    ///
    /// # Errors
    /// Returns [`PulseError::ConnectionFailed`] when the context fails.
    pub async fn next_event(&mut self) -> Result<MonitorEvent, PulseError> {
        loop {
            let notification = tokio::select! {
                retval = self.mainloop.run() => return Ok(MonitorEvent::Quit(retval.0)),
                Some(notification) = self.notifications_rx.recv() => notification,
            };

            match notification {
                Notification::StateChanged => match self.context.get_state() {
                    context::State::Terminated => return Ok(MonitorEvent::Terminated),
                    context::State::Failed => {
                        return Err(PulseError::ConnectionFailed(format!(
                            "{}",
                            self.context.errno()
                        )));
                    }
                    _ => {}
                },
                Notification::Subscription {
                    facility,
                    operation,
                    index,
                } => self.handle_subscription(facility, operation, index),
                Notification::Server(report) => {
                    self.query_default_devices(
                        report.default_sink_name.as_deref(),
                        report.default_source_name.as_deref(),
                    );
                    return Ok(MonitorEvent::Server(report));
                }
                Notification::Device(report) => return Ok(MonitorEvent::Device(report)),
            }
        }
    }

    /// Closes the connection to the audio server.
    pub fn disconnect(&mut self) {
        self.context.set_state_callback(None);
        self.context.disconnect();
    }

    fn setup_subscription(&mut self) {
        let state_tx = self.notifications_tx.clone();
        self.context
            .set_state_callback(Some(Box::new(move || {
                let _ = state_tx.send(Notification::StateChanged);
            })));

        let subscribe_tx = self.notifications_tx.clone();
        self.context
            .set_subscribe_callback(Some(Box::new(move |facility, operation, index| {
                let _ = subscribe_tx.send(Notification::Subscription {
                    facility,
                    operation,
                    index,
                });
            })));

        self.context
            .subscribe(InterestMaskSet::SINK | InterestMaskSet::SOURCE, |success| {
                if !success {
                    warn!("PulseAudio rejected the sink/source subscription");
                }
            });

        let server_tx = self.notifications_tx.clone();
        self.context.introspect().get_server_info(move |server_info| {
            let _ = server_tx.send(Notification::Server(server_report(server_info)));
        });
    }

    fn handle_subscription(
        &self,
        facility: Option<Facility>,
        operation: Option<Operation>,
        index: u32,
    ) {
        let Some(kind) = device_to_query(facility, operation) else {
            debug!(?facility, ?operation, index, "Unknown event");
            return;
        };

        debug!(?kind, ?operation, index, "Mixer change");
        match kind {
            DeviceKind::Sink => self.query_sink_by_index(index),
            DeviceKind::Source => self.query_source_by_index(index),
        }
    }

    fn query_sink_by_index(&self, index: u32) {
        let tx = self.notifications_tx.clone();
        self.context
            .introspect()
            .get_sink_info_by_index(index, move |result| {
                if let ListResult::Item(sink_info) = result {
                    let _ = tx.send(Notification::Device(device_report_from_sink(sink_info)));
                }
            });
    }

    fn query_source_by_index(&self, index: u32) {
        let tx = self.notifications_tx.clone();
        self.context
            .introspect()
            .get_source_info_by_index(index, move |result| {
                if let ListResult::Item(source_info) = result {
                    let _ = tx.send(Notification::Device(device_report_from_source(
                        source_info,
                    )));
                }
            });
    }

    fn query_default_devices(&self, sink_name: Option<&str>, source_name: Option<&str>) {
        let introspect = self.context.introspect();

        if let Some(name) = sink_name {
            let tx = self.notifications_tx.clone();
            introspect.get_sink_info_by_name(name, move |result| {
                if let ListResult::Item(sink_info) = result {
                    let _ = tx.send(Notification::Device(device_report_from_sink(sink_info)));
                }
            });
        }

        if let Some(name) = source_name {
            let tx = self.notifications_tx.clone();
            introspect.get_source_info_by_name(name, move |result| {
                if let ListResult::Item(source_info) = result {
                    let _ = tx.send(Notification::Device(device_report_from_source(
                        source_info,
                    )));
                }
            });
        }
    }
}
