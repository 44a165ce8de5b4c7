use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_ssm::error::DisplayErrorContext;
use aws_sdk_ssm::Client;
use log::debug;
use tokio::runtime::{Builder, Runtime};

use super::{Parameter, ParameterPage, ParameterStore, PathQuery, StoreError};

/// Parameter store backed by AWS Systems Manager.
///
/// The SDK is async; requests are driven one at a time on a private
/// current-thread runtime so callers stay synchronous.
pub struct SsmStore {
    runtime: Runtime,
    client: Client,
}

impl SsmStore {
    /// Build a client from the ambient AWS configuration (environment,
    /// shared profile files, instance or task role).
    pub fn from_env() -> Result<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to start async runtime for the AWS SDK")?;

        let sdk_config = runtime.block_on(aws_config::defaults(BehaviorVersion::latest()).load());
        match sdk_config.region() {
            Some(region) => debug!("Using SSM in region: {}", region),
            None => debug!("No AWS region configured, relying on SDK defaults"),
        }

        Ok(Self {
            runtime,
            client: Client::new(&sdk_config),
        })
    }
}

fn to_parameter(parameter: &aws_sdk_ssm::types::Parameter) -> Option<Parameter> {
    Some(Parameter::new(parameter.name()?, parameter.value()?))
}

impl ParameterStore for SsmStore {
    fn parameters_by_path(&self, query: &PathQuery) -> Result<ParameterPage, StoreError> {
        debug!("GetParametersByPath: {:?}", query);

        let output = self
            .runtime
            .block_on(
                self.client
                    .get_parameters_by_path()
                    .path(&query.path)
                    .with_decryption(true)
                    .recursive(query.recursive)
                    .set_next_token(query.next_token.clone())
                    .send(),
            )
            .map_err(|err| StoreError::ListByPath {
                path: query.path.clone(),
                message: DisplayErrorContext(&err).to_string(),
            })?;

        Ok(ParameterPage {
            parameters: output.parameters().iter().filter_map(to_parameter).collect(),
            next_token: output.next_token().map(str::to_owned),
        })
    }

    fn parameter(&self, name: &str) -> Result<Option<Parameter>, StoreError> {
        debug!("GetParameter: {}", name);

        let result = self.runtime.block_on(
            self.client
                .get_parameter()
                .name(name)
                .with_decryption(true)
                .send(),
        );

        match result {
            Ok(output) => Ok(output.parameter().and_then(to_parameter)),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|service_err| service_err.is_parameter_not_found()) =>
            {
                Ok(None)
            }
            Err(err) => Err(StoreError::GetParameter {
                name: name.to_string(),
                message: DisplayErrorContext(&err).to_string(),
            }),
        }
    }
}
