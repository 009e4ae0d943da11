// The fixed 8-bit character set used for all dictionary-internal text.
//
// The 256-entry table is ISO/IEC 8859-2 supplemented with the ISO/IEC 8859-1
// letters that 8859-2 lacks; signs with no use in Polish text (currency
// signs, fractions, spacing accents, AE/ETH/THORN and so on) are removed and
// the following are added: U+0178 (so that U+00FF has an uppercase partner),
// the typographic marks HYPHEN, EN DASH, EM DASH, the single and double
// quotation marks used in Polish print, HORIZONTAL ELLIPSIS, MINUS SIGN, and
// U+FFFD REPLACEMENT CHARACTER at byte 0xFF. Code points are strictly
// increasing in table order, which the reverse map relies on.

use std::cmp::Ordering;
use std::io::{self, Write};
use std::sync::OnceLock;

use hashbrown::HashMap;

const CHARACTER_TABLE: [(char, &str); 256] = [
    ('\u{0000}', "NULL"), // 0x00
    ('\u{0001}', "START OF HEADING"), // 0x01
    ('\u{0002}', "START OF TEXT"), // 0x02
    ('\u{0003}', "END OF TEXT"), // 0x03
    ('\u{0004}', "END OF TRANSMISSION"), // 0x04
    ('\u{0005}', "ENQUIRY"), // 0x05
    ('\u{0006}', "ACKNOWLEDGE"), // 0x06
    ('\u{0007}', "BELL"), // 0x07
    ('\u{0008}', "BACKSPACE"), // 0x08
    ('\u{0009}', "CHARACTER TABULATION"), // 0x09
    ('\u{000a}', "LINE FEED"), // 0x0a
    ('\u{000b}', "LINE TABULATION"), // 0x0b
    ('\u{000c}', "FORM FEED"), // 0x0c
    ('\u{000d}', "CARRIAGE RETURN"), // 0x0d
    ('\u{000e}', "SHIFT OUT"), // 0x0e
    ('\u{000f}', "SHIFT IN"), // 0x0f
    ('\u{0010}', "DATA LINK ESCAPE"), // 0x10
    ('\u{0011}', "DEVICE CONTROL ONE"), // 0x11
    ('\u{0012}', "DEVICE CONTROL TWO"), // 0x12
    ('\u{0013}', "DEVICE CONTROL THREE"), // 0x13
    ('\u{0014}', "DEVICE CONTROL FOUR"), // 0x14
    ('\u{0015}', "NEGATIVE ACKNOWLEDGE"), // 0x15
    ('\u{0016}', "SYNCHRONOUS IDLE"), // 0x16
    ('\u{0017}', "END OF TRANSMISSION BLOCK"), // 0x17
    ('\u{0018}', "CANCEL"), // 0x18
    ('\u{0019}', "END OF MEDIUM"), // 0x19
    ('\u{001a}', "SUBSTITUTE"), // 0x1a
    ('\u{001b}', "ESCAPE"), // 0x1b
    ('\u{001c}', "INFORMATION SEPARATOR FOUR"), // 0x1c
    ('\u{001d}', "INFORMATION SEPARATOR THREE"), // 0x1d
    ('\u{001e}', "INFORMATION SEPARATOR TWO"), // 0x1e
    ('\u{001f}', "INFORMATION SEPARATOR ONE"), // 0x1f
    ('\u{0020}', "SPACE"), // 0x20
    ('\u{0021}', "EXCLAMATION MARK"), // 0x21
    ('\u{0022}', "QUOTATION MARK"), // 0x22
    ('\u{0023}', "NUMBER SIGN"), // 0x23
    ('\u{0024}', "DOLLAR SIGN"), // 0x24
    ('\u{0025}', "PERCENT SIGN"), // 0x25
    ('\u{0026}', "AMPERSAND"), // 0x26
    ('\u{0027}', "APOSTROPHE"), // 0x27
    ('\u{0028}', "LEFT PARENTHESIS"), // 0x28
    ('\u{0029}', "RIGHT PARENTHESIS"), // 0x29
    ('\u{002a}', "ASTERISK"), // 0x2a
    ('\u{002b}', "PLUS SIGN"), // 0x2b
    ('\u{002c}', "COMMA"), // 0x2c
    ('\u{002d}', "HYPHEN-MINUS"), // 0x2d
    ('\u{002e}', "FULL STOP"), // 0x2e
    ('\u{002f}', "SOLIDUS"), // 0x2f
    ('\u{0030}', "DIGIT ZERO"), // 0x30
    ('\u{0031}', "DIGIT ONE"), // 0x31
    ('\u{0032}', "DIGIT TWO"), // 0x32
    ('\u{0033}', "DIGIT THREE"), // 0x33
    ('\u{0034}', "DIGIT FOUR"), // 0x34
    ('\u{0035}', "DIGIT FIVE"), // 0x35
    ('\u{0036}', "DIGIT SIX"), // 0x36
    ('\u{0037}', "DIGIT SEVEN"), // 0x37
    ('\u{0038}', "DIGIT EIGHT"), // 0x38
    ('\u{0039}', "DIGIT NINE"), // 0x39
    ('\u{003a}', "COLON"), // 0x3a
    ('\u{003b}', "SEMICOLON"), // 0x3b
    ('\u{003c}', "LESS-THAN SIGN"), // 0x3c
    ('\u{003d}', "EQUALS SIGN"), // 0x3d
    ('\u{003e}', "GREATER-THAN SIGN"), // 0x3e
    ('\u{003f}', "QUESTION MARK"), // 0x3f
    ('\u{0040}', "COMMERCIAL AT"), // 0x40
    ('\u{0041}', "LATIN CAPITAL LETTER A"), // 0x41
    ('\u{0042}', "LATIN CAPITAL LETTER B"), // 0x42
    ('\u{0043}', "LATIN CAPITAL LETTER C"), // 0x43
    ('\u{0044}', "LATIN CAPITAL LETTER D"), // 0x44
    ('\u{0045}', "LATIN CAPITAL LETTER E"), // 0x45
    ('\u{0046}', "LATIN CAPITAL LETTER F"), // 0x46
    ('\u{0047}', "LATIN CAPITAL LETTER G"), // 0x47
    ('\u{0048}', "LATIN CAPITAL LETTER H"), // 0x48
    ('\u{0049}', "LATIN CAPITAL LETTER I"), // 0x49
    ('\u{004a}', "LATIN CAPITAL LETTER J"), // 0x4a
    ('\u{004b}', "LATIN CAPITAL LETTER K"), // 0x4b
    ('\u{004c}', "LATIN CAPITAL LETTER L"), // 0x4c
    ('\u{004d}', "LATIN CAPITAL LETTER M"), // 0x4d
    ('\u{004e}', "LATIN CAPITAL LETTER N"), // 0x4e
    ('\u{004f}', "LATIN CAPITAL LETTER O"), // 0x4f
    ('\u{0050}', "LATIN CAPITAL LETTER P"), // 0x50
    ('\u{0051}', "LATIN CAPITAL LETTER Q"), // 0x51
    ('\u{0052}', "LATIN CAPITAL LETTER R"), // 0x52
    ('\u{0053}', "LATIN CAPITAL LETTER S"), // 0x53
    ('\u{0054}', "LATIN CAPITAL LETTER T"), // 0x54
    ('\u{0055}', "LATIN CAPITAL LETTER U"), // 0x55
    ('\u{0056}', "LATIN CAPITAL LETTER V"), // 0x56
    ('\u{0057}', "LATIN CAPITAL LETTER W"), // 0x57
    ('\u{0058}', "LATIN CAPITAL LETTER X"), // 0x58
    ('\u{0059}', "LATIN CAPITAL LETTER Y"), // 0x59
    ('\u{005a}', "LATIN CAPITAL LETTER Z"), // 0x5a
    ('\u{005b}', "LEFT SQUARE BRACKET"), // 0x5b
    ('\u{005c}', "REVERSE SOLIDUS"), // 0x5c
    ('\u{005d}', "RIGHT SQUARE BRACKET"), // 0x5d
    ('\u{005e}', "CIRCUMFLEX ACCENT"), // 0x5e
    ('\u{005f}', "LOW LINE"), // 0x5f
    ('\u{0060}', "GRAVE ACCENT"), // 0x60
    ('\u{0061}', "LATIN SMALL LETTER A"), // 0x61
    ('\u{0062}', "LATIN SMALL LETTER B"), // 0x62
    ('\u{0063}', "LATIN SMALL LETTER C"), // 0x63
    ('\u{0064}', "LATIN SMALL LETTER D"), // 0x64
    ('\u{0065}', "LATIN SMALL LETTER E"), // 0x65
    ('\u{0066}', "LATIN SMALL LETTER F"), // 0x66
    ('\u{0067}', "LATIN SMALL LETTER G"), // 0x67
    ('\u{0068}', "LATIN SMALL LETTER H"), // 0x68
    ('\u{0069}', "LATIN SMALL LETTER I"), // 0x69
    ('\u{006a}', "LATIN SMALL LETTER J"), // 0x6a
    ('\u{006b}', "LATIN SMALL LETTER K"), // 0x6b
    ('\u{006c}', "LATIN SMALL LETTER L"), // 0x6c
    ('\u{006d}', "LATIN SMALL LETTER M"), // 0x6d
    ('\u{006e}', "LATIN SMALL LETTER N"), // 0x6e
    ('\u{006f}', "LATIN SMALL LETTER O"), // 0x6f
    ('\u{0070}', "LATIN SMALL LETTER P"), // 0x70
    ('\u{0071}', "LATIN SMALL LETTER Q"), // 0x71
    ('\u{0072}', "LATIN SMALL LETTER R"), // 0x72
    ('\u{0073}', "LATIN SMALL LETTER S"), // 0x73
    ('\u{0074}', "LATIN SMALL LETTER T"), // 0x74
    ('\u{0075}', "LATIN SMALL LETTER U"), // 0x75
    ('\u{0076}', "LATIN SMALL LETTER V"), // 0x76
    ('\u{0077}', "LATIN SMALL LETTER W"), // 0x77
    ('\u{0078}', "LATIN SMALL LETTER X"), // 0x78
    ('\u{0079}', "LATIN SMALL LETTER Y"), // 0x79
    ('\u{007a}', "LATIN SMALL LETTER Z"), // 0x7a
    ('\u{007b}', "LEFT CURLY BRACKET"), // 0x7b
    ('\u{007c}', "VERTICAL LINE"), // 0x7c
    ('\u{007d}', "RIGHT CURLY BRACKET"), // 0x7d
    ('\u{007e}', "TILDE"), // 0x7e
    ('\u{007f}', "DELETE"), // 0x7f
    ('\u{00a0}', "NO-BREAK SPACE"), // 0x80
    ('\u{00a7}', "SECTION SIGN"), // 0x81
    ('\u{00a9}', "COPYRIGHT SIGN"), // 0x82
    ('\u{00ab}', "LEFT-POINTING DOUBLE ANGLE QUOTATION MARK"), // 0x83
    ('\u{00ae}', "REGISTERED SIGN"), // 0x84
    ('\u{00b0}', "DEGREE SIGN"), // 0x85
    ('\u{00b1}', "PLUS-MINUS SIGN"), // 0x86
    ('\u{00bb}', "RIGHT-POINTING DOUBLE ANGLE QUOTATION MARK"), // 0x87
    ('\u{00c0}', "LATIN CAPITAL LETTER A WITH GRAVE"), // 0x88
    ('\u{00c1}', "LATIN CAPITAL LETTER A WITH ACUTE"), // 0x89
    ('\u{00c2}', "LATIN CAPITAL LETTER A WITH CIRCUMFLEX"), // 0x8a
    ('\u{00c3}', "LATIN CAPITAL LETTER A WITH TILDE"), // 0x8b
    ('\u{00c4}', "LATIN CAPITAL LETTER A WITH DIAERESIS"), // 0x8c
    ('\u{00c5}', "LATIN CAPITAL LETTER A WITH RING ABOVE"), // 0x8d
    ('\u{00c7}', "LATIN CAPITAL LETTER C WITH CEDILLA"), // 0x8e
    ('\u{00c8}', "LATIN CAPITAL LETTER E WITH GRAVE"), // 0x8f
    ('\u{00c9}', "LATIN CAPITAL LETTER E WITH ACUTE"), // 0x90
    ('\u{00ca}', "LATIN CAPITAL LETTER E WITH CIRCUMFLEX"), // 0x91
    ('\u{00cb}', "LATIN CAPITAL LETTER E WITH DIAERESIS"), // 0x92
    ('\u{00cc}', "LATIN CAPITAL LETTER I WITH GRAVE"), // 0x93
    ('\u{00cd}', "LATIN CAPITAL LETTER I WITH ACUTE"), // 0x94
    ('\u{00ce}', "LATIN CAPITAL LETTER I WITH CIRCUMFLEX"), // 0x95
    ('\u{00cf}', "LATIN CAPITAL LETTER I WITH DIAERESIS"), // 0x96
    ('\u{00d1}', "LATIN CAPITAL LETTER N WITH TILDE"), // 0x97
    ('\u{00d2}', "LATIN CAPITAL LETTER O WITH GRAVE"), // 0x98
    ('\u{00d3}', "LATIN CAPITAL LETTER O WITH ACUTE"), // 0x99
    ('\u{00d4}', "LATIN CAPITAL LETTER O WITH CIRCUMFLEX"), // 0x9a
    ('\u{00d5}', "LATIN CAPITAL LETTER O WITH TILDE"), // 0x9b
    ('\u{00d6}', "LATIN CAPITAL LETTER O WITH DIAERESIS"), // 0x9c
    ('\u{00d8}', "LATIN CAPITAL LETTER O WITH STROKE"), // 0x9d
    ('\u{00d9}', "LATIN CAPITAL LETTER U WITH GRAVE"), // 0x9e
    ('\u{00da}', "LATIN CAPITAL LETTER U WITH ACUTE"), // 0x9f
    ('\u{00db}', "LATIN CAPITAL LETTER U WITH CIRCUMFLEX"), // 0xa0
    ('\u{00dc}', "LATIN CAPITAL LETTER U WITH DIAERESIS"), // 0xa1
    ('\u{00dd}', "LATIN CAPITAL LETTER Y WITH ACUTE"), // 0xa2
    ('\u{00df}', "LATIN SMALL LETTER SHARP S"), // 0xa3
    ('\u{00e0}', "LATIN SMALL LETTER A WITH GRAVE"), // 0xa4
    ('\u{00e1}', "LATIN SMALL LETTER A WITH ACUTE"), // 0xa5
    ('\u{00e2}', "LATIN SMALL LETTER A WITH CIRCUMFLEX"), // 0xa6
    ('\u{00e3}', "LATIN SMALL LETTER A WITH TILDE"), // 0xa7
    ('\u{00e4}', "LATIN SMALL LETTER A WITH DIAERESIS"), // 0xa8
    ('\u{00e5}', "LATIN SMALL LETTER A WITH RING ABOVE"), // 0xa9
    ('\u{00e7}', "LATIN SMALL LETTER C WITH CEDILLA"), // 0xaa
    ('\u{00e8}', "LATIN SMALL LETTER E WITH GRAVE"), // 0xab
    ('\u{00e9}', "LATIN SMALL LETTER E WITH ACUTE"), // 0xac
    ('\u{00ea}', "LATIN SMALL LETTER E WITH CIRCUMFLEX"), // 0xad
    ('\u{00eb}', "LATIN SMALL LETTER E WITH DIAERESIS"), // 0xae
    ('\u{00ec}', "LATIN SMALL LETTER I WITH GRAVE"), // 0xaf
    ('\u{00ed}', "LATIN SMALL LETTER I WITH ACUTE"), // 0xb0
    ('\u{00ee}', "LATIN SMALL LETTER I WITH CIRCUMFLEX"), // 0xb1
    ('\u{00ef}', "LATIN SMALL LETTER I WITH DIAERESIS"), // 0xb2
    ('\u{00f1}', "LATIN SMALL LETTER N WITH TILDE"), // 0xb3
    ('\u{00f2}', "LATIN SMALL LETTER O WITH GRAVE"), // 0xb4
    ('\u{00f3}', "LATIN SMALL LETTER O WITH ACUTE"), // 0xb5
    ('\u{00f4}', "LATIN SMALL LETTER O WITH CIRCUMFLEX"), // 0xb6
    ('\u{00f5}', "LATIN SMALL LETTER O WITH TILDE"), // 0xb7
    ('\u{00f6}', "LATIN SMALL LETTER O WITH DIAERESIS"), // 0xb8
    ('\u{00f8}', "LATIN SMALL LETTER O WITH STROKE"), // 0xb9
    ('\u{00f9}', "LATIN SMALL LETTER U WITH GRAVE"), // 0xba
    ('\u{00fa}', "LATIN SMALL LETTER U WITH ACUTE"), // 0xbb
    ('\u{00fb}', "LATIN SMALL LETTER U WITH CIRCUMFLEX"), // 0xbc
    ('\u{00fc}', "LATIN SMALL LETTER U WITH DIAERESIS"), // 0xbd
    ('\u{00fd}', "LATIN SMALL LETTER Y WITH ACUTE"), // 0xbe
    ('\u{00ff}', "LATIN SMALL LETTER Y WITH DIAERESIS"), // 0xbf
    ('\u{0102}', "LATIN CAPITAL LETTER A WITH BREVE"), // 0xc0
    ('\u{0103}', "LATIN SMALL LETTER A WITH BREVE"), // 0xc1
    ('\u{0104}', "LATIN CAPITAL LETTER A WITH OGONEK"), // 0xc2
    ('\u{0105}', "LATIN SMALL LETTER A WITH OGONEK"), // 0xc3
    ('\u{0106}', "LATIN CAPITAL LETTER C WITH ACUTE"), // 0xc4
    ('\u{0107}', "LATIN SMALL LETTER C WITH ACUTE"), // 0xc5
    ('\u{010c}', "LATIN CAPITAL LETTER C WITH CARON"), // 0xc6
    ('\u{010d}', "LATIN SMALL LETTER C WITH CARON"), // 0xc7
    ('\u{010e}', "LATIN CAPITAL LETTER D WITH CARON"), // 0xc8
    ('\u{010f}', "LATIN SMALL LETTER D WITH CARON"), // 0xc9
    ('\u{0110}', "LATIN CAPITAL LETTER D WITH STROKE"), // 0xca
    ('\u{0111}', "LATIN SMALL LETTER D WITH STROKE"), // 0xcb
    ('\u{0118}', "LATIN CAPITAL LETTER E WITH OGONEK"), // 0xcc
    ('\u{0119}', "LATIN SMALL LETTER E WITH OGONEK"), // 0xcd
    ('\u{011a}', "LATIN CAPITAL LETTER E WITH CARON"), // 0xce
    ('\u{011b}', "LATIN SMALL LETTER E WITH CARON"), // 0xcf
    ('\u{0139}', "LATIN CAPITAL LETTER L WITH ACUTE"), // 0xd0
    ('\u{013a}', "LATIN SMALL LETTER L WITH ACUTE"), // 0xd1
    ('\u{013d}', "LATIN CAPITAL LETTER L WITH CARON"), // 0xd2
    ('\u{013e}', "LATIN SMALL LETTER L WITH CARON"), // 0xd3
    ('\u{0141}', "LATIN CAPITAL LETTER L WITH STROKE"), // 0xd4
    ('\u{0142}', "LATIN SMALL LETTER L WITH STROKE"), // 0xd5
    ('\u{0143}', "LATIN CAPITAL LETTER N WITH ACUTE"), // 0xd6
    ('\u{0144}', "LATIN SMALL LETTER N WITH ACUTE"), // 0xd7
    ('\u{0147}', "LATIN CAPITAL LETTER N WITH CARON"), // 0xd8
    ('\u{0148}', "LATIN SMALL LETTER N WITH CARON"), // 0xd9
    ('\u{0150}', "LATIN CAPITAL LETTER O WITH DOUBLE ACUTE"), // 0xda
    ('\u{0151}', "LATIN SMALL LETTER O WITH DOUBLE ACUTE"), // 0xdb
    ('\u{0154}', "LATIN CAPITAL LETTER R WITH ACUTE"), // 0xdc
    ('\u{0155}', "LATIN SMALL LETTER R WITH ACUTE"), // 0xdd
    ('\u{0158}', "LATIN CAPITAL LETTER R WITH CARON"), // 0xde
    ('\u{0159}', "LATIN SMALL LETTER R WITH CARON"), // 0xdf
    ('\u{015a}', "LATIN CAPITAL LETTER S WITH ACUTE"), // 0xe0
    ('\u{015b}', "LATIN SMALL LETTER S WITH ACUTE"), // 0xe1
    ('\u{015e}', "LATIN CAPITAL LETTER S WITH CEDILLA"), // 0xe2
    ('\u{015f}', "LATIN SMALL LETTER S WITH CEDILLA"), // 0xe3
    ('\u{0160}', "LATIN CAPITAL LETTER S WITH CARON"), // 0xe4
    ('\u{0161}', "LATIN SMALL LETTER S WITH CARON"), // 0xe5
    ('\u{0162}', "LATIN CAPITAL LETTER T WITH CEDILLA"), // 0xe6
    ('\u{0163}', "LATIN SMALL LETTER T WITH CEDILLA"), // 0xe7
    ('\u{0164}', "LATIN CAPITAL LETTER T WITH CARON"), // 0xe8
    ('\u{0165}', "LATIN SMALL LETTER T WITH CARON"), // 0xe9
    ('\u{016e}', "LATIN CAPITAL LETTER U WITH RING ABOVE"), // 0xea
    ('\u{016f}', "LATIN SMALL LETTER U WITH RING ABOVE"), // 0xeb
    ('\u{0170}', "LATIN CAPITAL LETTER U WITH DOUBLE ACUTE"), // 0xec
    ('\u{0171}', "LATIN SMALL LETTER U WITH DOUBLE ACUTE"), // 0xed
    ('\u{0178}', "LATIN CAPITAL LETTER Y WITH DIAERESIS"), // 0xee
    ('\u{0179}', "LATIN CAPITAL LETTER Z WITH ACUTE"), // 0xef
    ('\u{017a}', "LATIN SMALL LETTER Z WITH ACUTE"), // 0xf0
    ('\u{017b}', "LATIN CAPITAL LETTER Z WITH DOT ABOVE"), // 0xf1
    ('\u{017c}', "LATIN SMALL LETTER Z WITH DOT ABOVE"), // 0xf2
    ('\u{017d}', "LATIN CAPITAL LETTER Z WITH CARON"), // 0xf3
    ('\u{017e}', "LATIN SMALL LETTER Z WITH CARON"), // 0xf4
    ('\u{2010}', "HYPHEN"), // 0xf5
    ('\u{2013}', "EN DASH"), // 0xf6
    ('\u{2014}', "EM DASH"), // 0xf7
    ('\u{2018}', "LEFT SINGLE QUOTATION MARK"), // 0xf8
    ('\u{2019}', "RIGHT SINGLE QUOTATION MARK"), // 0xf9
    ('\u{201b}', "SINGLE HIGH-REVERSED-9 QUOTATION MARK"), // 0xfa
    ('\u{201d}', "RIGHT DOUBLE QUOTATION MARK"), // 0xfb
    ('\u{201e}', "DOUBLE LOW-9 QUOTATION MARK"), // 0xfc
    ('\u{2026}', "HORIZONTAL ELLIPSIS"), // 0xfd
    ('\u{2212}', "MINUS SIGN"), // 0xfe
    ('\u{fffd}', "REPLACEMENT CHARACTER"), // 0xff
];

const CTYPE_TABLE: [u16; 256] = [
    0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, // 0x00-0x07
    0x008, 0x20c, 0x208, 0x208, 0x208, 0x208, 0x008, 0x008, // 0x08-0x0f
    0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, // 0x10-0x17
    0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, 0x008, // 0x18-0x1f
    0x284, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0x20-0x27
    0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0x28-0x2f
    0x8b1, 0x8b1, 0x8b1, 0x8b1, 0x8b1, 0x8b1, 0x8b1, 0x8b1, // 0x30-0x37
    0x8b1, 0x8b1, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0x38-0x3f
    0x1a0, 0xca3, 0xca3, 0xca3, 0xca3, 0xca3, 0xca3, 0x4a3, // 0x40-0x47
    0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, // 0x48-0x4f
    0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, // 0x50-0x57
    0x4a3, 0x4a3, 0x4a3, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0x58-0x5f
    0x1a0, 0x8e3, 0x8e3, 0x8e3, 0x8e3, 0x8e3, 0x8e3, 0x0e3, // 0x60-0x67
    0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0x68-0x6f
    0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0x70-0x77
    0x0e3, 0x0e3, 0x0e3, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x008, // 0x78-0x7f
    0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0x80-0x87
    0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, // 0x88-0x8f
    0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, // 0x90-0x97
    0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, 0x4a3, // 0x98-0x9f
    0x4a3, 0x4a3, 0x4a3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0xa0-0xa7
    0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0xa8-0xaf
    0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0xb0-0xb7
    0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, 0x0e3, // 0xb8-0xbf
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, // 0xc0-0xc7
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, // 0xc8-0xcf
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, // 0xd0-0xd7
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, // 0xd8-0xdf
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, // 0xe0-0xe7
    0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x4a3, // 0xe8-0xef
    0x0e3, 0x4a3, 0x0e3, 0x4a3, 0x0e3, 0x1a0, 0x1a0, 0x1a0, // 0xf0-0xf7
    0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, 0x1a0, // 0xf8-0xff
];

const TO_UPPER: [u8; 256] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // 0x00-0x07
    0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, // 0x08-0x0f
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, // 0x10-0x17
    0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, // 0x18-0x1f
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, // 0x20-0x27
    0x28, 0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, // 0x28-0x2f
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, // 0x30-0x37
    0x38, 0x39, 0x3a, 0x3b, 0x3c, 0x3d, 0x3e, 0x3f, // 0x38-0x3f
    0x40, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, // 0x40-0x47
    0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, // 0x48-0x4f
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, // 0x50-0x57
    0x58, 0x59, 0x5a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, // 0x58-0x5f
    0x60, 0x41, 0x42, 0x43, 0x44, 0x45, 0x46, 0x47, // 0x60-0x67
    0x48, 0x49, 0x4a, 0x4b, 0x4c, 0x4d, 0x4e, 0x4f, // 0x68-0x6f
    0x50, 0x51, 0x52, 0x53, 0x54, 0x55, 0x56, 0x57, // 0x70-0x77
    0x58, 0x59, 0x5a, 0x7b, 0x7c, 0x7d, 0x7e, 0x7f, // 0x78-0x7f
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, // 0x80-0x87
    0x88, 0x89, 0x8a, 0x8b, 0x8c, 0x8d, 0x8e, 0x8f, // 0x88-0x8f
    0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, // 0x90-0x97
    0x98, 0x99, 0x9a, 0x9b, 0x9c, 0x9d, 0x9e, 0x9f, // 0x98-0x9f
    0xa0, 0xa1, 0xa2, 0xa3, 0x88, 0x89, 0x8a, 0x8b, // 0xa0-0xa7
    0x8c, 0x8d, 0x8e, 0x8f, 0x90, 0x91, 0x92, 0x93, // 0xa8-0xaf
    0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9a, 0x9b, // 0xb0-0xb7
    0x9c, 0x9d, 0x9e, 0x9f, 0xa0, 0xa1, 0xa2, 0xee, // 0xb8-0xbf
    0xc0, 0xc0, 0xc2, 0xc2, 0xc4, 0xc4, 0xc6, 0xc6, // 0xc0-0xc7
    0xc8, 0xc8, 0xca, 0xca, 0xcc, 0xcc, 0xce, 0xce, // 0xc8-0xcf
    0xd0, 0xd0, 0xd2, 0xd2, 0xd4, 0xd4, 0xd6, 0xd6, // 0xd0-0xd7
    0xd8, 0xd8, 0xda, 0xda, 0xdc, 0xdc, 0xde, 0xde, // 0xd8-0xdf
    0xe0, 0xe0, 0xe2, 0xe2, 0xe4, 0xe4, 0xe6, 0xe6, // 0xe0-0xe7
    0xe8, 0xe8, 0xea, 0xea, 0xec, 0xec, 0xee, 0xef, // 0xe8-0xef
    0xef, 0xf1, 0xf1, 0xf3, 0xf3, 0xf5, 0xf6, 0xf7, // 0xf0-0xf7
    0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff, // 0xf8-0xff
];

const TO_LOWER: [u8; 256] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, // 0x00-0x07
    0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f, // 0x08-0x0f
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, // 0x10-0x17
    0x18, 0x19, 0x1a, 0x1b, 0x1c, 0x1d, 0x1e, 0x1f, // 0x18-0x1f
    0x20, 0x21, 0x22, 0x23, 0x24, 0x25, 0x26, 0x27, // 0x20-0x27
    0x28, 0x29, 0x2a, 0x2b, 0x2c, 0x2d, 0x2e, 0x2f, // 0x28-0x2f
    0x30, 0x31, 0x32, 0x33, 0x34, 0x35, 0x36, 0x37, // 0x30-0x37
    0x38, 0x39, 0x3a, 0x3b, 0x3c, 0x3d, 0x3e, 0x3f, // 0x38-0x3f
    0x40, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, // 0x40-0x47
    0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, // 0x48-0x4f
    0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, // 0x50-0x57
    0x78, 0x79, 0x7a, 0x5b, 0x5c, 0x5d, 0x5e, 0x5f, // 0x58-0x5f
    0x60, 0x61, 0x62, 0x63, 0x64, 0x65, 0x66, 0x67, // 0x60-0x67
    0x68, 0x69, 0x6a, 0x6b, 0x6c, 0x6d, 0x6e, 0x6f, // 0x68-0x6f
    0x70, 0x71, 0x72, 0x73, 0x74, 0x75, 0x76, 0x77, // 0x70-0x77
    0x78, 0x79, 0x7a, 0x7b, 0x7c, 0x7d, 0x7e, 0x7f, // 0x78-0x7f
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, // 0x80-0x87
    0xa4, 0xa5, 0xa6, 0xa7, 0xa8, 0xa9, 0xaa, 0xab, // 0x88-0x8f
    0xac, 0xad, 0xae, 0xaf, 0xb0, 0xb1, 0xb2, 0xb3, // 0x90-0x97
    0xb4, 0xb5, 0xb6, 0xb7, 0xb8, 0xb9, 0xba, 0xbb, // 0x98-0x9f
    0xbc, 0xbd, 0xbe, 0xa3, 0xa4, 0xa5, 0xa6, 0xa7, // 0xa0-0xa7
    0xa8, 0xa9, 0xaa, 0xab, 0xac, 0xad, 0xae, 0xaf, // 0xa8-0xaf
    0xb0, 0xb1, 0xb2, 0xb3, 0xb4, 0xb5, 0xb6, 0xb7, // 0xb0-0xb7
    0xb8, 0xb9, 0xba, 0xbb, 0xbc, 0xbd, 0xbe, 0xbf, // 0xb8-0xbf
    0xc1, 0xc1, 0xc3, 0xc3, 0xc5, 0xc5, 0xc7, 0xc7, // 0xc0-0xc7
    0xc9, 0xc9, 0xcb, 0xcb, 0xcd, 0xcd, 0xcf, 0xcf, // 0xc8-0xcf
    0xd1, 0xd1, 0xd3, 0xd3, 0xd5, 0xd5, 0xd7, 0xd7, // 0xd0-0xd7
    0xd9, 0xd9, 0xdb, 0xdb, 0xdd, 0xdd, 0xdf, 0xdf, // 0xd8-0xdf
    0xe1, 0xe1, 0xe3, 0xe3, 0xe5, 0xe5, 0xe7, 0xe7, // 0xe0-0xe7
    0xe9, 0xe9, 0xeb, 0xeb, 0xed, 0xed, 0xbf, 0xf0, // 0xe8-0xef
    0xf0, 0xf2, 0xf2, 0xf4, 0xf4, 0xf5, 0xf6, 0xf7, // 0xf0-0xf7
    0xf8, 0xf9, 0xfa, 0xfb, 0xfc, 0xfd, 0xfe, 0xff, // 0xf8-0xff
];

const ORDER_TABLE: [u8; 256] = [
      0,   1,   2,   3,   4,   5,   6,   7, // 0x00-0x07
      8,   9,  10,  11,  12,  13,  14,  15, // 0x08-0x0f
     16,  17,  18,  19,  20,  21,  22,  23, // 0x10-0x17
     24,  25,  26,  27,  28,  29,  30,  31, // 0x18-0x1f
     32,  33,  34,  35,  36,  37,  38,  39, // 0x20-0x27
     40,  41,  42,  43,  44,  45,  46,  47, // 0x28-0x2f
     48,  49,  50,  51,  52,  53,  54,  55, // 0x30-0x37
     56,  57,  58,  59,  60,  61,  62,  63, // 0x38-0x3f
     64,  95, 113, 115, 123, 129, 143, 145, // 0x40-0x47
    147, 149, 159, 161, 163, 171, 173, 181, // 0x48-0x4f
    197, 199, 201, 207, 216, 222, 236, 238, // 0x50-0x57
    240, 242, 248,  65,  66,  67,  68,  69, // 0x58-0x5f
     70, 104, 114, 119, 126, 136, 144, 146, // 0x60-0x67
    148, 154, 160, 162, 167, 172, 177, 189, // 0x68-0x6f
    198, 200, 204, 211, 219, 229, 237, 239, // 0x70-0x77
    241, 245, 252,  71,  72,  73,  74,  75, // 0x78-0x7f
     76,  77,  78,  79,  80,  81,  82,  83, // 0x80-0x87
    101,  97, 102, 103,  98,  99, 118, 134, // 0x88-0x8f
    131, 135, 133, 152, 150, 153, 151, 176, // 0x90-0x97
    185, 183, 186, 187, 184, 182, 226, 223, // 0x98-0x9f
    227, 224, 243, 215, 110, 106, 111, 112, // 0xa0-0xa7
    107, 108, 122, 141, 138, 142, 140, 157, // 0xa8-0xaf
    155, 158, 156, 180, 193, 191, 194, 195, // 0xb0-0xb7
    192, 190, 233, 230, 234, 231, 246, 247, // 0xb8-0xbf
    100, 109,  96, 105, 116, 120, 117, 121, // 0xc0-0xc7
    125, 128, 124, 127, 130, 137, 132, 139, // 0xc8-0xcf
    165, 169, 166, 170, 164, 168, 174, 178, // 0xd0-0xd7
    175, 179, 188, 196, 202, 205, 203, 206, // 0xd8-0xdf
    208, 212, 210, 214, 209, 213, 218, 221, // 0xe0-0xe7
    217, 220, 225, 232, 228, 235, 244, 249, // 0xe8-0xef
    253, 250, 254, 251, 255,  84,  85,  86, // 0xf0-0xf7
     87,  88,  89,  90,  91,  92,  93,  94, // 0xf8-0xff
];

// Bits of CTYPE_TABLE entries.
const ALNUM: u16 = 1 << 0;
const ALPHA: u16 = 1 << 1;
const BLANK: u16 = 1 << 2;
const CNTRL: u16 = 1 << 3;
const DIGIT: u16 = 1 << 4;
const GRAPH: u16 = 1 << 5;
const LOWER: u16 = 1 << 6;
const PRINT: u16 = 1 << 7;
const PUNCT: u16 = 1 << 8;
const SPACE: u16 = 1 << 9;
const UPPER: u16 = 1 << 10;
const XDIGIT: u16 = 1 << 11;

/// A Unicode code point with no representation in the character set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid character in charset")]
pub struct InvalidCharacterError;

fn reverse_map() -> &'static HashMap<char, u8> {
    static MAP: OnceLock<HashMap<char, u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        let mut m = HashMap::with_capacity(256);
        for (i, &(c, _)) in CHARACTER_TABLE.iter().enumerate() {
            m.insert(c, i as u8);
        }
        m
    })
}

/// The Unicode code point represented by byte `b`.
pub fn unicode(b: u8) -> char {
    CHARACTER_TABLE[b as usize].0
}

/// The Unicode character name of the code point represented by byte `b`.
pub fn name(b: u8) -> &'static str {
    CHARACTER_TABLE[b as usize].1
}

/// The byte representing code point `c`, if the charset has one.
pub fn unicode_to_byte(c: char) -> Result<u8, InvalidCharacterError> {
    reverse_map().get(&c).copied().ok_or(InvalidCharacterError)
}

/// Converts a UTF-8 string to charset bytes.
///
/// Fails on the first code point with no charset representation.
pub fn utf8_to_charset(s: &str) -> Result<Vec<u8>, InvalidCharacterError> {
    let mut t = Vec::with_capacity(s.len());
    for c in s.chars() {
        t.push(unicode_to_byte(c)?);
    }
    Ok(t)
}

/// Converts charset bytes to a UTF-8 string. Total: every byte is mapped.
pub fn charset_to_utf8(s: &[u8]) -> String {
    s.iter().map(|&b| unicode(b)).collect()
}

fn has(b: u8, bit: u16) -> bool {
    CTYPE_TABLE[b as usize] & bit != 0
}

pub fn is_alnum(b: u8) -> bool {
    has(b, ALNUM)
}

pub fn is_alpha(b: u8) -> bool {
    has(b, ALPHA)
}

pub fn is_blank(b: u8) -> bool {
    has(b, BLANK)
}

pub fn is_cntrl(b: u8) -> bool {
    has(b, CNTRL)
}

pub fn is_digit(b: u8) -> bool {
    has(b, DIGIT)
}

pub fn is_graph(b: u8) -> bool {
    has(b, GRAPH)
}

pub fn is_lower(b: u8) -> bool {
    has(b, LOWER)
}

pub fn is_print(b: u8) -> bool {
    has(b, PRINT)
}

pub fn is_punct(b: u8) -> bool {
    has(b, PUNCT)
}

pub fn is_space(b: u8) -> bool {
    has(b, SPACE)
}

pub fn is_upper(b: u8) -> bool {
    has(b, UPPER)
}

pub fn is_xdigit(b: u8) -> bool {
    has(b, XDIGIT)
}

pub fn to_lower(b: u8) -> u8 {
    TO_LOWER[b as usize]
}

pub fn to_upper(b: u8) -> u8 {
    TO_UPPER[b as usize]
}

/// Collation order of two charset bytes.
///
/// Letters group by base letter regardless of diacritics, with a fixed
/// diacritic order breaking ties; all letters sort between ASCII punctuation
/// and the typographic punctuation block.
pub fn chrcmp(lhs: u8, rhs: u8) -> Ordering {
    ORDER_TABLE[lhs as usize].cmp(&ORDER_TABLE[rhs as usize])
}

/// Collation order of two charset strings.
///
/// Bytes are compared for equality directly; the first differing position is
/// ordered by [`chrcmp`], a shared prefix by length.
pub fn alpha_cmp(lhs: &[u8], rhs: &[u8]) -> Ordering {
    for (&a, &b) in lhs.iter().zip(rhs.iter()) {
        if a != b {
            return chrcmp(a, b);
        }
    }
    lhs.len().cmp(&rhs.len())
}

/// Maps every byte to lowercase in place.
pub fn lowercase(s: &mut [u8]) {
    for b in s.iter_mut() {
        *b = to_lower(*b);
    }
}

/// Maps every byte to uppercase in place.
pub fn uppercase(s: &mut [u8]) {
    for b in s.iter_mut() {
        *b = to_upper(*b);
    }
}

/// Lowercases the string and uppercases its first byte, in place.
pub fn capitalize(s: &mut [u8]) {
    lowercase(s);
    if let Some(b) = s.first_mut() {
        *b = to_upper(*b);
    }
}

/// `test` is a prefix of `input` strictly shorter than `input`.
pub fn is_proper_prefix(input: &[u8], test: &[u8]) -> bool {
    input.len() > test.len() && input.starts_with(test)
}

/// `test` is a suffix of `input` strictly shorter than `input`.
pub fn is_proper_suffix(input: &[u8], test: &[u8]) -> bool {
    input.len() > test.len() && input.ends_with(test)
}

/// Every byte of `s` is a lowercase letter.
pub fn is_lower_str(s: &[u8]) -> bool {
    s.iter().all(|&b| is_lower(b))
}

/// Every byte of `s` is an uppercase letter.
pub fn is_upper_str(s: &[u8]) -> bool {
    s.iter().all(|&b| is_upper(b))
}

/// The first byte is uppercase and the rest are lowercase. True for the
/// empty string.
pub fn is_capit(s: &[u8]) -> bool {
    match s.split_first() {
        None => true,
        Some((&first, rest)) => is_upper(first) && rest.iter().all(|&b| is_lower(b)),
    }
}

/// Writes the whole character table in a human-readable layout.
pub fn write_character_table(f: &mut impl Write) -> io::Result<()> {
    writeln!(f, "Dec   Hex  Oct   Code     Char Description")?;
    for (i, &(c, nm)) in CHARACTER_TABLE.iter().enumerate() {
        let shown = if is_print(i as u8) { c } else { ' ' };
        writeln!(
            f,
            "{i:3}   {i:02x}   {i:03o}   U+{:04x}   {shown}    {nm}",
            c as u32
        )?;
    }
    Ok(())
}
