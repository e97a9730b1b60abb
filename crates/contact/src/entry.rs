/// A static contact detail shown above the form.
pub struct Entry {
    pub icon: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
    pub link: &'static str,
}

pub const ENTRIES: &[Entry] = &[
    Entry {
        icon: "/static/contact-call.svg",
        title: "Phone No",
        desc: "+353 (0)874950977",
        link: "tel:+353874950977",
    },
    Entry {
        icon: "/static/contact-mail.svg",
        title: "Email Address",
        desc: "info@oaksurveys.ie",
        link: "mailto:info@oaksurveys.ie",
    },
];
