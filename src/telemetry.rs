use anyhow::Context;
use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::Tracer;
use opentelemetry_sdk::Resource;
use secrecy::ExposeSecret;
use tonic::metadata::{Ascii, MetadataKey, MetadataMap, MetadataValue};
use tracing::subscriber::set_global_default;
use tracing::Subscriber;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};

use crate::configuration::{OtlpSettings, TelemetrySettings};

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// configured level; `sink` receives the formatted output.
pub fn init_subscriber<Sink>(
    name: String,
    sink: Sink,
    settings: &TelemetrySettings,
) -> anyhow::Result<()>
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    LogTracer::init().context("Failed to set logger")?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    let otlp_layer = otlp_tracer(name.clone(), &settings.otlp)?
        .map(|tracer| tracing_opentelemetry::layer().with_tracer(tracer));

    let registry = Registry::default()
        .with(env_filter)
        .with(formatting_layer(name, sink, settings.json))
        .with(otlp_layer);

    set_global_default(registry).context("Failed to set subscriber")?;
    Ok(())
}

/// Bunyan JSON lines when `json` is set, human-readable text otherwise.
pub fn formatting_layer<S, Sink>(
    name: String,
    sink: Sink,
    json: bool,
) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    if json {
        Box::new(JsonStorageLayer.and_then(BunyanFormattingLayer::new(name, sink)))
    } else {
        Box::new(fmt::layer().with_writer(sink))
    }
}

pub fn otlp_tracer(name: String, settings: &OtlpSettings) -> anyhow::Result<Option<Tracer>> {
    if !settings.enabled {
        return Ok(None);
    }
    let exporter = opentelemetry_otlp::new_exporter()
        .tonic()
        .with_metadata(otlp_metadata(settings)?)
        .with_endpoint(&settings.endpoint)
        .with_tls_config(Default::default());
    let trace_config = opentelemetry_sdk::trace::config()
        .with_resource(Resource::new(vec![KeyValue::new("service.name", name)]));

    let tracer = opentelemetry_otlp::new_pipeline()
        .tracing()
        .with_exporter(exporter)
        .with_trace_config(trace_config)
        .install_batch(opentelemetry_sdk::runtime::Tokio)
        .context("Failed to install opentelemetry tracer")?;
    Ok(Some(tracer))
}

/// gRPC metadata carrying the api key under the configured header.
pub fn otlp_metadata(settings: &OtlpSettings) -> anyhow::Result<MetadataMap> {
    let key = MetadataKey::<Ascii>::from_bytes(settings.api_key_header.as_bytes())
        .with_context(|| format!("Invalid otlp api key header {:?}", settings.api_key_header))?;
    let value: MetadataValue<Ascii> = settings
        .api_key
        .expose_secret()
        .parse()
        .context("Failed to parse otlp api key")?;

    let mut meta_data = MetadataMap::new();
    meta_data.insert(key, value);
    Ok(meta_data)
}

/// Flushes spans still buffered by the batch exporter.
pub fn shutdown_telemetry() {
    opentelemetry::global::shutdown_tracer_provider();
}
