//! Food items as exchanged with the backend.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type FoodId = u64;

/// A food entry as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: String,
    /// Decimal amount kept as text; never parsed.
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

/// Body of a create request.
///
/// `available` is not a field: new items are always sent as available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewFood {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: Option<String>,
}

impl Serialize for NewFood {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Wire<'a> {
            name: &'a str,
            price: &'a str,
            image: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
            available: bool,
        }

        Wire {
            name: &self.name,
            price: &self.price,
            image: &self.image,
            description: self.description.as_deref(),
            available: true,
        }
        .serialize(serializer)
    }
}

/// Partial update submitted from the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FoodPatch {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub description: Option<Option<String>>,
    pub available: Option<bool>,
}

impl FoodPatch {
    /// Merge onto `base`. Fields present in the patch win; `id` always
    /// comes from `base`.
    pub fn apply(&self, base: &Food) -> Food {
        Food {
            id: base.id,
            name: self.name.clone().unwrap_or_else(|| base.name.clone()),
            price: self.price.clone().unwrap_or_else(|| base.price.clone()),
            image: self.image.clone().unwrap_or_else(|| base.image.clone()),
            description: self
                .description
                .clone()
                .unwrap_or_else(|| base.description.clone()),
            available: self.available.unwrap_or(base.available),
        }
    }

    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}

/// Text fields of the add/edit dialog, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Price,
    Image,
    Description,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Price,
        FormField::Image,
        FormField::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Price => "Price",
            FormField::Image => "Image URL",
            FormField::Description => "Description",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(FormField),
}

/// Editable form backing both dialogs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FoodForm {
    pub name: String,
    pub price: String,
    pub image: String,
    pub description: String,
    pub focused: usize,
}

impl FoodForm {
    pub fn from_food(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            price: food.price.clone(),
            image: food.image.clone(),
            description: food.description.clone().unwrap_or_default(),
            focused: 0,
        }
    }

    pub fn focused_field(&self) -> FormField {
        FormField::ALL[self.focused % FormField::ALL.len()]
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Price => &self.price,
            FormField::Image => &self.image,
            FormField::Description => &self.description,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Price => &mut self.price,
            FormField::Image => &mut self.image,
            FormField::Description => &mut self.description,
        }
    }

    pub fn push_char(&mut self, ch: char) {
        let field = self.focused_field();
        self.value_mut(field).push(ch);
    }

    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        self.value_mut(field).pop();
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FormField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = if self.focused == 0 {
            FormField::ALL.len() - 1
        } else {
            self.focused - 1
        };
    }

    /// Build a create body. Name and price must be non-empty.
    pub fn to_new_food(&self) -> Result<NewFood, FormError> {
        self.check_required()?;
        Ok(NewFood {
            name: self.name.trim().to_string(),
            price: self.price.trim().to_string(),
            image: self.image.trim().to_string(),
            description: non_empty(&self.description),
        })
    }

    /// Build a patch carrying every field of the form.
    pub fn to_patch(&self) -> Result<FoodPatch, FormError> {
        self.check_required()?;
        Ok(FoodPatch {
            name: Some(self.name.trim().to_string()),
            price: Some(self.price.trim().to_string()),
            image: Some(self.image.trim().to_string()),
            description: Some(non_empty(&self.description)),
            available: None,
        })
    }

    fn check_required(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Name));
        }
        if self.price.trim().is_empty() {
            return Err(FormError::MissingField(FormField::Price));
        }
        Ok(())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
