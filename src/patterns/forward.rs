//! Forwarded-message banners, body openers and subject prefixes

/// Banner phrases written between dashes by mail clients when forwarding,
/// e.g. `-------- Forwarded Message --------`. Sourced from Thunderbird's
/// `mailnews.forward_header_originalmessage` localizations plus extras seen
/// in the wild.
pub const FORWARD_HEADER_PATTERNS: &[&str] = &[
    "رسالة ممرّرة",                                 // ar
    "Mensaxe reunviáu",                             // ast
    "Накіраваны ліст",                              // be
    "Оригинално писмо",                             // bg
    "Kemennadenn orinel",                           // br
    "Missatge reenviat",                            // ca
    "Přeposlaná zpráva",                            // cs
    "Neges Wreiddiol",                              // cy
    "Videresendt meddelelse",                       // da
    "Weitergeleitete Nachricht",                    // de
    "Dalej pósrědnjona powěsć",                     // dsb
    "Forwarded Message",                            // el, en, ja, uk, xh
    "Mensaje reenviado",                            // es
    "Edastatud kiri",                               // et
    "Birbidalitako mezua",                          // eu
    "Välitetty viesti / Fwd.Msg",                   // fi
    "Välitetty viesti",                             // fi
    "Message transféré",                            // fr
    "Trochstjoerd berjocht",                        // fy-NL
    "Teachtaireacht Ar Aghaidh",                    // ga-IE
    "An teachdaireachd a tha ’ga shìneadh air adhart", // gd
    "Mensaxe reenviada",                            // gl
    "Proslijeđena poruka",                          // hr
    "Dale sposrědkowana powěsć",                    // hsb
    "Továbbított üzenet",                           // hu
    "Փոխանցվող նամակը",                             // hy-AM
    "Áframsendur póstur",                           // is
    "Messaggio Inoltrato",                          // it
    "បាន​បញ្ជូន​សារ​បន្ត",                              // km
    "전달된 메시지",                                   // ko
    "Persiųstas laiškas",                           // lt
    "Videresendt melding",                          // nb-NO
    "Doorgestuurd bericht",                         // nl
    "Vidaresend melding",                           // nn-NO
    "Treść przekazanej wiadomości",                 // pl
    "Mensagem encaminhada",                         // pt-BR
    "Mensagem reencaminhada",                       // pt-PT
    "Messadi renvià",                               // rm
    "Mesajul original",                             // ro
    "Перенаправленное сообщение",                   // ru
    "Preposlaná správa --- Forwarded Message",      // sk
    "Preposlaná správa",                            // sk
    "Posredovano sporočilo",                        // sl
    "Mesazhi i Përcjellë",                          // sq
    "Vidarebefordrat meddelande",                   // sv-SE
    "İletilmiş İleti",                              // tr
    "转发的消息",                                     // zh-CN
    "轉寄郵件",                                       // zh-TW
    // Spanish variants produced by webmail clients
    "Mensaje reenviado de .*",
    "Mensaje remitido",
    "Mensaje enviado",
];

/// Whole-line openers some clients (Apple Mail, iOS) put above a forwarded body.
pub const FORWARD_BODY_START_PATTERNS: &[&str] = &[
    "Begin forwarded message:",
    "Inicio del mensaje reenviado:",
    "Anfang der weitergeleiteten E-Mail:",
    "Anfang der weitergeleiteten Nachricht:",
    "Inizio messaggio inoltrato:",
];

/// Subject abbreviations marking a forward, matched as `<prefix>: `.
///
/// See <https://en.wikipedia.org/wiki/List_of_email_subject_abbreviations>.
pub const FORWARD_SUBJECTS: &[&str] = &[
    // English
    "Fw",
    "Fwd",
    "Forwarded",
    // Chinese
    "轉寄",
    "转发",
    // Danish, Norwegian
    "VS",
    "Videresendt",
    // Dutch
    "Doorst",
    "Doorsturen",
    // Finnish
    "VL",
    "Välitetty",
    // French
    "TR",
    "Transfert",
    // German
    "WG",
    "Weitergeleitet",
    // Greek
    "ΠΡΘ",
    "Προωθημένο",
    // Hebrew
    "הועבר",
    // Hungarian
    "Továbbítás",
    // Italian
    "I",
    "Inoltro",
    // Icelandic
    "FS",
    "Framsenda",
    // Indonesian
    "TRS",
    "Terusan",
    // Swedish
    "VB",
    "Vidarebefordrat",
    // Spanish
    "RV",
    "Reenviar",
    // Portuguese
    "ENC",
    "Encaminhado",
    // Polish
    "PD",
    "Podaj dalej",
    // Turkish
    "İLT",
    "İlet",
];
