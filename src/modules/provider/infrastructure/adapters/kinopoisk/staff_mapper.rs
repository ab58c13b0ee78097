use super::mapper::KinopoiskMapper;
use super::models::{PersonResponse, ProfessionKey, StaffResponse};
use crate::modules::person::domain::{
    entities::{CanonicalPerson, CastMember},
    value_objects::PersonType,
};
use crate::shared::utils::{first_non_blank, is_blank, parse_iso_instant, LogContext};

impl KinopoiskMapper {
    /// Map Kinopoisk profession code to PersonType
    pub fn map_person_type(key: Option<ProfessionKey>) -> PersonType {
        match key {
            Some(ProfessionKey::Actor) => PersonType::Actor,
            Some(ProfessionKey::Director) => PersonType::Director,
            Some(ProfessionKey::Writer) => PersonType::Writer,
            Some(ProfessionKey::Composer) => PersonType::Composer,
            Some(ProfessionKey::Producer) | Some(ProfessionKey::ProducerUssr) => {
                PersonType::Producer
            }
            _ => PersonType::Unclassified,
        }
    }

    /// Map a person payload; absent only when there is no payload
    pub fn to_person(&self, person: Option<&PersonResponse>) -> Option<CanonicalPerson> {
        let Some(person) = person else {
            LogContext::normalized("person", None, false);
            return None;
        };
        let name = self
            .names
            .local_name(person.name_ru.as_deref(), person.name_en.as_deref());

        let production_locations = if is_blank(person.birthplace.as_deref()) {
            None
        } else {
            person.birthplace.clone().map(|place| vec![place])
        };

        LogContext::normalized("person", person.person_id, true);
        Some(CanonicalPerson {
            provider_ids: self.source_ids(person.person_id),
            name: name.map(str::to_string),
            birth_date: parse_iso_instant(person.birthday.as_deref()),
            death_date: parse_iso_instant(person.death.as_deref()),
            production_locations,
            image_url: person.poster_url.clone(),
        })
    }

    /// Map one staff entry; the display order is assigned by `to_cast_members`
    pub fn to_cast_member(&self, staff: &StaffResponse) -> Option<CastMember> {
        let name = first_non_blank([staff.name_ru.as_deref(), staff.name_en.as_deref()])?;

        Some(CastMember {
            provider_ids: self.source_ids(staff.staff_id),
            name: name.to_string(),
            image_url: staff.poster_url.clone(),
            role: staff.profession_text.clone().unwrap_or_default(),
            person_type: Self::map_person_type(staff.profession_key),
            sort_order: 0,
        })
    }

    /// Map a staff listing, keeping input order and numbering entries from 1
    pub fn to_cast_members(&self, staff: &[StaffResponse]) -> Vec<CastMember> {
        let members: Vec<CastMember> = staff
            .iter()
            .filter_map(|entry| self.to_cast_member(entry))
            .zip(1..)
            .map(|(member, order)| CastMember {
                sort_order: order,
                ..member
            })
            .collect();

        LogContext::dropped_entries("staff", staff.len() - members.len(), staff.len());
        members
    }
}
