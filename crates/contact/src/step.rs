use std::time::Duration;

use crate::Field;

pub const TOTAL_STEPS: u8 = 6;

/// Delay between picking an option chip and moving to the next step.
pub const AUTO_ADVANCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, PartialEq, Eq)]
pub struct StepDescriptor {
    pub number: u8,
    /// Fields that must be filled before leaving the step forward.
    pub required: &'static [Field],
    /// Option field picked on this step; picking it schedules an auto-advance.
    pub choice: Option<Field>,
}

pub static STEPS: [StepDescriptor; TOTAL_STEPS as usize] = [
    StepDescriptor {
        number: 1,
        required: &[Field::FirstName, Field::LastName],
        choice: None,
    },
    StepDescriptor {
        number: 2,
        required: &[Field::Company],
        choice: None,
    },
    StepDescriptor {
        number: 3,
        required: &[Field::DiscoveredVia],
        choice: Some(Field::DiscoveredVia),
    },
    StepDescriptor {
        number: 4,
        required: &[Field::ServiceNeeded],
        choice: Some(Field::ServiceNeeded),
    },
    StepDescriptor {
        number: 5,
        required: &[Field::Email],
        choice: None,
    },
    StepDescriptor {
        number: 6,
        required: &[Field::ProjectDescription],
        choice: None,
    },
];

impl StepDescriptor {
    /// Descriptor for a step number, clamped to the valid range.
    pub fn get(number: u8) -> &'static StepDescriptor {
        let index = number.clamp(1, TOTAL_STEPS) - 1;
        &STEPS[index as usize]
    }

    /// Step on which an option field is picked.
    pub fn owning(field: Field) -> Option<&'static StepDescriptor> {
        STEPS.iter().find(|step| step.choice == Some(field))
    }

    pub fn is_last(&self) -> bool {
        self.number == TOTAL_STEPS
    }
}
