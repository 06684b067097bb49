/*
 *  display/page.rs
 *
 *  InfoDeck - instruments around the map
 *  (c) 2020-26 Stuart Hunter
 *
 *  Page layout definitions - collections of fields
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use super::field::{Field, FieldType};

/// Named fields for one InfoBox layout, in the order the window host
/// creates them: InfoBox slots first, then the map.
#[derive(Debug, Clone)]
pub struct PageLayout {
    /// Page identifier
    pub name: String,

    /// Fields that make up this page
    pub fields: Vec<Field>,
}

impl PageLayout {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Builder: append a field
    pub fn add_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builder: append several fields
    pub fn add_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// InfoBox fields in slot order
    pub fn info_boxes(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| f.slot().is_some())
    }

    /// The map field, if the page has one
    pub fn main_view(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_type == FieldType::MainView)
    }
}
