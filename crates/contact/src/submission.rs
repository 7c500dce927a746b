use std::str::FromStr;

use strum::{AsRefStr, Display, EnumString, VariantArray};
use validator::Validate;
use visionflow_shared::contact::{DiscoveryChannel, Service};

/// Form fields collected by the wizard, named the way they are posted.
#[derive(EnumString, Display, AsRefStr, VariantArray, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Company,
    DiscoveredVia,
    ServiceNeeded,
    Email,
    ProjectDescription,
}

/// Everything the visitor typed or picked so far.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct ContactSubmission {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    pub company: String,
    pub discovered_via: Option<DiscoveryChannel>,
    pub service_needed: Option<Service>,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub project_description: String,
    pub privacy_agreed: bool,
}

impl ContactSubmission {
    /// Whether a field holds something other than whitespace.
    pub fn is_filled(&self, field: Field) -> bool {
        match field {
            Field::FirstName => filled(&self.first_name),
            Field::LastName => filled(&self.last_name),
            Field::Company => filled(&self.company),
            Field::DiscoveredVia => self.discovered_via.is_some(),
            Field::ServiceNeeded => self.service_needed.is_some(),
            Field::Email => filled(&self.email),
            Field::ProjectDescription => filled(&self.project_description),
        }
    }

    /// Current value of a field as it is rendered back into the form.
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Company => &self.company,
            Field::DiscoveredVia => self.discovered_via.as_ref().map_or("", |v| v.as_ref()),
            Field::ServiceNeeded => self.service_needed.as_ref().map_or("", |v| v.as_ref()),
            Field::Email => &self.email,
            Field::ProjectDescription => &self.project_description,
        }
    }

    /// Sets a field from its posted text. Option fields accept their label,
    /// an empty value clears them.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Result<(), strum::ParseError> {
        let value = value.into();

        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Company => self.company = value,
            Field::DiscoveredVia => self.discovered_via = parse_option(&value)?,
            Field::ServiceNeeded => self.service_needed = parse_option(&value)?,
            Field::Email => self.email = value,
            Field::ProjectDescription => self.project_description = value,
        }

        Ok(())
    }

    /// The only shape the submission handler ever receives.
    pub fn is_dispatchable(&self) -> bool {
        self.privacy_agreed
            && [
                Field::FirstName,
                Field::LastName,
                Field::Email,
                Field::ProjectDescription,
            ]
            .into_iter()
            .all(|field| self.is_filled(field))
    }

    /// Server side shape check run right before dispatch.
    pub fn verify(&self) -> visionflow_shared::Result<()> {
        self.validate()?;

        if !self.privacy_agreed {
            visionflow_shared::bail!("privacy policy was not accepted");
        }

        Ok(())
    }

    /// Company as shown to the business, never blank.
    pub fn company_or_default(&self) -> &str {
        if filled(&self.company) {
            &self.company
        } else {
            "Not provided"
        }
    }

    /// Message block sent to the business: discovery, service, then description.
    pub fn message(&self) -> String {
        format!(
            "Discovery Method: {}\nService Needed: {}\n\nProject Description:\n{}",
            self.value(Field::DiscoveredVia),
            self.value(Field::ServiceNeeded),
            self.project_description
        )
    }
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

fn parse_option<T: FromStr<Err = strum::ParseError>>(
    value: &str,
) -> Result<Option<T>, strum::ParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    T::from_str(value).map(Some)
}
