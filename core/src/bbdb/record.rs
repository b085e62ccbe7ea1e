use crate::record::ContactRecord;
use crate::schema::Field;

use super::RecordStamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneLabel {
    Home,
    Main,
    Mobile,
    Work,
}

impl PhoneLabel {
    /// Emission order of the phone group.
    pub const ORDER: [PhoneLabel; 4] = [
        PhoneLabel::Home,
        PhoneLabel::Main,
        PhoneLabel::Mobile,
        PhoneLabel::Work,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhoneLabel::Home => "Home",
            PhoneLabel::Main => "Main",
            PhoneLabel::Mobile => "Mobile",
            PhoneLabel::Work => "Work",
        }
    }

    pub fn field(self) -> Field {
        match self {
            PhoneLabel::Home => Field::HomePhone,
            PhoneLabel::Main => Field::MainPhone,
            PhoneLabel::Mobile => Field::MobilePhone,
            PhoneLabel::Work => Field::WorkPhone,
        }
    }
}

pub const MAIL_ORDER: [Field; 3] = [Field::HomeEmail, Field::WorkEmail, Field::OtherEmail];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone {
    pub label: PhoneLabel,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BbdbRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Never populated; kept so the name group has its fixed arity.
    pub nickname: Option<String>,
    pub organization: Option<String>,
    pub phones: Vec<Phone>,
    pub mails: Vec<String>,
    pub stamp: RecordStamp,
}

impl BbdbRecord {
    pub fn from_contact(contact: &ContactRecord, stamp: &RecordStamp) -> Self {
        let owned = |f: Field| contact.get(f).map(str::to_string);

        let phones = PhoneLabel::ORDER
            .into_iter()
            .filter_map(|label| {
                contact.get(label.field()).map(|n| Phone {
                    label,
                    number: n.trim().to_string(),
                })
            })
            .collect();

        let mails = MAIL_ORDER
            .into_iter()
            .filter_map(|f| contact.get(f).map(str::to_string))
            .collect();

        Self {
            first_name: owned(Field::FirstName),
            last_name: owned(Field::LastName),
            nickname: None,
            organization: owned(Field::Company),
            phones,
            mails,
            stamp: stamp.clone(),
        }
    }
}
