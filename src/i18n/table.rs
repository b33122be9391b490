// src/i18n/table.rs  -  Site dictionary (some values carry inline markup on purpose)

translations!(site_entries, [
    // ── Global / header ──────────────────────────────────────────────────────
    "pageTitle"        => Text { ar: "المؤسسة المصرية العربية المتحدة — الصفحة الرئيسية", en: "Egyptian Arab United Foundation — Homepage" },
    "pageTitleContact" => Text { ar: "تواصل معنا — المؤسسة المصرية العربية المتحدة", en: "Contact Us — Egyptian Arab United Foundation" },
    "langToggle"       => Text { ar: "English", en: "العربية" },
    "brandNameAR"      => Text { ar: "المؤسسة المصرية العربية المتحدة", en: "Egyptian Arab United Foundation" },
    "brandNameEN"      => Text { ar: "Egyptian Arab United Foundation", en: "Egyptian Arab United Foundation" },
    "home"             => Text { ar: "الرئيسية", en: "Home" },
    "about"            => Text { ar: "عنّا", en: "About Us" },
    "products"         => Text { ar: "منتجاتنا", en: "Products" },
    "quality"          => Text { ar: "الجودة", en: "Quality" },
    "contact"          => Text { ar: "تواصل (جملة)", en: "Contact (Wholesale)" },

    // ── Statement / hero ─────────────────────────────────────────────────────
    "statementTitle"    => Text { ar: "الاحترافية والجودة العالمية", en: "Professionalism and Global Quality" },
    "statementSubtitle" => Text { ar: "مؤسستنا توفر لكم منتجات بجودة لا مثيل لها.", en: "Our foundation provides products with unmatched quality." },
    "heroTitle"         => Text { ar: "منتجات تعبئة وتجارة المواد الغذائية", en: "Foodstuff Packaging and Trading Products" },
    "heroSubtitle"      => Text { ar: "جودة ومواصفات صحية تناسب التجزئة والتجار والشركات.", en: "Quality and health specifications suitable for retail, traders, and companies." },
    "explore"           => Text { ar: "تعرّف على منتجاتنا", en: "Explore Products" },
    "request"           => Text { ar: "اطلب عينة / طلب جملة", en: "Request Sample / Wholesale" },
    "cardTitle"         => Text { ar: "طلب تجاري / جملة", en: "Wholesale / Commercial Request" },
    "cardText"          => Text { ar: "لتجار التجزئة والموزعين والشركات — املأ نموذج الطلب وسيتم التواصل معك.", en: "For retailers, distributors, and companies — fill out the form and we will contact you." },
    "orderNow"          => Text { ar: "اطلب الآن", en: "Order Now" },

    // ── About ────────────────────────────────────────────────────────────────
    "aboutTitle" => Text { ar: "عن المؤسسة", en: "About the Foundation" },
    "aboutText"  => Text {
        ar: "المؤسسة المصرية العربية المتحدة متخصصة في تعبئة وتجارة المواد الغذائية من طنطا — منتجاتنا تشمل ملح فلو، ملح روزابيلا وخلين طبيعيين: خل فرست وخل أويس. نراعي الجودة ومعايير الصحة الغذائية في كل دفعة تعبئة.",
        en: "The Egyptian Arab United Foundation specializes in packaging and trading foodstuff from Tanta — our products include Flow Salt, Rosabella Salt, and two natural vinegars: First Vinegar and Oweis Vinegar. We adhere to quality and food health standards in every batch."
    },

    // ── Products ─────────────────────────────────────────────────────────────
    "productsTitle"    => Text { ar: "منتجاتنا", en: "Our Products" },
    "productsSubtitle" => Text { ar: "اضغط 'طلب عرض سعر' لملء نموذج طلب الجملة تلقائيًا.", en: "Click 'Request Quote' to automatically pre-fill the wholesale order form." },
    "product_flow"     => Text { ar: "ملح فلو", en: "Salt Flow" },
    "product_ros"      => Text { ar: "ملح روزابيلا", en: "Salt Rosabella" },
    "product_first"    => Text { ar: "خل فرست", en: "First Vinegar" },
    "product_oweis"    => Text { ar: "خل أويس", en: "Oweis Vinegar" },
    "desc_flow"        => Text { ar: "ملح مُكرر عالي النقاء، مناسب للاستهلاك الأسري والصناعي.", en: "High-purity refined salt, suitable for family and industrial consumption." },
    "desc_ros"         => Text { ar: "نوع مخصوص بمعدلات معادن طبيعية لمذاق مطبخي مميز.", en: "A special type with natural mineral ratios for a distinctive kitchen taste." },
    "desc_first"       => Text { ar: "خل قصب طبيعي ٥٪، مناسب للطبخ والتخليل.", en: "Natural cane vinegar 5%, suitable for cooking and pickling." },
    "desc_oweis"       => Text { ar: "خل طبيعي بديل ضمن التشكيلة، جودة متسقة.", en: "Consistent quality natural vinegar as an alternative in the selection." },
    "weight_flow"      => Text { ar: "أوزان: 250جم · 500جم · 1كجم · بالجملة", en: "Weights: 250g · 500g · 1kg · Wholesale" },

    // ── Quality / gallery ────────────────────────────────────────────────────
    "qualityTitle"    => Text { ar: "الجودة والشهادات", en: "Quality and Certifications" },
    "galleryTitle"    => Text { ar: "معرض الصور", en: "Image Gallery" },
    "gallerySubtitle" => Text { ar: "لقطات من خطوط الإنتاج، التعبئة، والتخزين.", en: "Shots from production lines, packaging, and storage." },

    // ── Contact / quick info ─────────────────────────────────────────────────
    "quickInfoTitle" => Text { ar: "معلومات سريعة", en: "Quick Info" },
    "address" => Markup {
        ar: "العنوان: شارع أحمد كمال، <a href=\"https://g.co/kgs/UBNLNpj\" target=\"_blank\" rel=\"noopener noreferrer\">طنطا</a>، محافظة الغربية",
        en: "Address: Ahmed Kamal St., <a href=\"https://g.co/kgs/UBNLNpj\" target=\"_blank\" rel=\"noopener noreferrer\">Tanta</a>, Gharbiya Governorate"
    },
    "phoneLandline" => Markup {
        ar: "هاتف أرضي: <a href=\"tel:0403340197\">0403340197</a>",
        en: "Landline: <a href=\"tel:0403340197\">0403340197</a>"
    },
    "phoneMobile" => Markup {
        ar: "موبايل: <a href=\"tel:010228752730\">010228752730</a> · <a href=\"tel:01220966916\">01220966916</a> · <a href=\"tel:01150627549\">01150627549</a> · <a href=\"tel:01551846749\">01551846749</a>",
        en: "Mobile: <a href=\"tel:010228752730\">010228752730</a> · <a href=\"tel:01220966916\">01220966916</a> · <a href=\"tel:01150627549\">01150627549</a> · <a href=\"tel:01551846749\">01551846749</a>"
    },
    "websiteLink" => Markup {
        ar: "الموقع: <a href=\"https://g.co/kgs/UBNLNpj\" target=\"_blank\" rel=\"noopener noreferrer\">عرض الخريطة</a>",
        en: "Map: <a href=\"https://g.co/kgs/UBNLNpj\" target=\"_blank\" rel=\"noopener noreferrer\">Open map</a>"
    },
    "facebookLink" => Markup {
        ar: "فيسبوك: <a href=\"https://www.facebook.com/profile.php?id=61556167168849\" target=\"_blank\" rel=\"noopener noreferrer\">صفحتنا</a>",
        en: "Facebook: <a href=\"https://www.facebook.com/profile.php?id=61556167168849\" target=\"_blank\" rel=\"noopener noreferrer\">Our page</a>"
    },

    // ── Forms & labels ───────────────────────────────────────────────────────
    "tabWholesale"       => Text { ar: "طلب عرض سعر / جملة", en: "Request Quote / Wholesale" },
    "tabFeedback"        => Text { ar: "شكاوى واستفسارات", en: "Complaints & Inquiries" },
    "formWholesaleTitle" => Text { ar: "نموذج طلب تجاري / جملة", en: "Wholesale / Commercial Request Form" },
    "labelClientType"    => Text { ar: "نوع العميل", en: "Client Type" },
    "optionChoose"       => Text { ar: "--- اختر ---", en: "--- Choose ---" },
    "optionRetailer"     => Text { ar: "تاجر تجزئة", en: "Retailer" },
    "optionDistributor"  => Text { ar: "موزّع / تاجر جملة", en: "Distributor / Wholesaler" },
    "optionCompany"      => Text { ar: "شركة / مطبخ صناعي", en: "Company / Industrial Kitchen" },
    "optionOther"        => Text { ar: "أخرى", en: "Other" },
    "labelProduct"       => Text { ar: "المنتج", en: "Product" },
    "optionChooseProduct"=> Text { ar: "--- اختر منتج ---", en: "--- Choose Product ---" },
    "labelQuantity"      => Text { ar: "الكمية المطلوبة (عدد باكيت / كرتون - الحد الأدنى 10)", en: "Required Quantity (Packs / Cartons - Min. 10)" },
    "labelCompanyName"   => Text { ar: "اسم الشركة / المحل (إن وجد)", en: "Company / Store Name (If applicable)" },
    "labelContactName"   => Text { ar: "اسم جهة الاتصال (المُرسِل)", en: "Contact Person Name (Sender)" },
    "labelEmail"         => Text { ar: "البريد الإلكتروني (هام للتواصل الرسمي)", en: "Email (Important for formal contact)" },
    "labelPhone"         => Text { ar: "الهاتف", en: "Phone" },
    "labelNotes"         => Text { ar: "ملاحظات إضافية", en: "Additional Notes" },
    "btnSendQuote"       => Text { ar: "ارسل طلب عرض سعر", en: "Send Quote Request" },

    // ── Alerts ───────────────────────────────────────────────────────────────
    "alertMissingFields"    => Text { ar: "⚠ الرجاء ملء كل الحقول المطلوبة: نوع العميل، المنتج، الكمية، الاسم، البريد، والهاتف.", en: "⚠ Please fill in all required fields: Client Type, Product, Quantity, Name, Email, and Phone." },
    "alertMissingFeedback"  => Text { ar: "⚠ الرجاء ملء الحقول المطلوبة (النوع، التفاصيل، الاسم، والإيميل).", en: "⚠ Please fill in the required fields (Type, Details, Name, and Email)." },
    "alertQuantity"         => Text { ar: "❗ الكمية يجب أن تكون رقمًا لا يقل عن 10 وحدات (لطلبات الجملة).", en: "❗ Quantity must be a number greater than or equal to 10 units (for wholesale orders)." },
    "alertPhone"            => Text { ar: "📞 رقم الهاتف غير صالح، يرجى إدخاله بشكل صحيح.", en: "📞 Invalid phone number, please enter it correctly." },
    "alertEmail"            => Text { ar: "✉️ البريد الإلكتروني غير صالح، يرجى إدخاله بشكل صحيح.", en: "✉️ Invalid email address, please enter it correctly." },
    "alertSuccessWholesale" => Text { ar: "✅ تم إرسال طلبك بنجاح! سيتواصل معك فريق المبيعات خلال ساعات العمل.", en: "✅ Your request was sent successfully! Our sales team will contact you during business hours." },
    "alertSuccessFeedback"  => Text { ar: "✅ تم إرسال طلبك بنجاح! سيتم مراجعة الشكوى/الاستفسار والرد عليك في أقرب وقت.", en: "✅ Your request was sent successfully! The complaint/inquiry will be reviewed and responded to as soon as possible." },

    // ── Footer ───────────────────────────────────────────────────────────────
    // Followed on the page by `#year` and a `brandNameAR` span.
    "footerCopy" => Text { ar: "جميع الحقوق محفوظة ©", en: "All Rights Reserved ©" },
    "facebook"   => Text { ar: "فيسبوك", en: "Facebook" },
    "instagram"  => Text { ar: "إنستجرام", en: "Instagram" },
    "location"   => Text { ar: "الموقع الجغرافي", en: "Location" },
    "backTop"    => Text { ar: "↑", en: "↑" },
]);
