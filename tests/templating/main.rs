mod experiences;
